//! PJLink CLI
//!
//! Command-line interface for controlling a PJLink projector.

use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};
use pjlink::network::{NotificationListener, UdpDatagramSource};
use pjlink::types::{
    Freeze, InputSwitchClass1, InputSwitchClass2, MuteState, PowerInstruction, VolumeAdjustment,
};
use pjlink::{Client, ClientConfig, PjlinkError};
use tracing_subscriber::{fmt, EnvFilter};

/// PJLink CLI
#[derive(Parser, Debug)]
#[command(name = "pjlink-cli")]
#[command(about = "Control PJLink class 1 and class 2 projectors")]
#[command(version)]
struct Args {
    /// Projector host name or IP address
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Projector control port
    #[arg(short, long, default_value = "4352")]
    port: u16,

    /// Projector password
    #[arg(long)]
    password: Option<String>,

    /// Connect, read and write timeout in milliseconds
    #[arg(short, long, default_value = "5000")]
    timeout_ms: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the full projector state as JSON
    State,

    /// Switch power
    Power {
        #[arg(value_enum)]
        state: Switch,
    },

    /// Select an input, e.g. "31"
    Input {
        code: String,

        /// Use the class 2 input switch (channels 1-9, A-Z)
        #[arg(long)]
        class2: bool,
    },

    /// Set audio/video mute, e.g. "31" for video and audio on
    Mute { code: String },

    /// Freeze or unfreeze the picture
    Freeze {
        #[arg(value_enum)]
        state: Switch,
    },

    /// Step a volume up or down
    Volume {
        #[arg(value_enum)]
        target: VolumeTarget,

        #[arg(value_enum)]
        direction: Direction,
    },

    /// Print notifications as they arrive
    Listen {
        /// UDP bind address [default: 0.0.0.0:4352]
        #[arg(long)]
        bind: Option<String>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Switch {
    On,
    Off,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum VolumeTarget {
    Speaker,
    Microphone,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Direction {
    Up,
    Down,
}

fn main() {
    // Initialize tracing/logging
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,pjlink=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    tracing::debug!("pjlink-cli v{}", pjlink::VERSION);

    if let Err(e) = run(args) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> pjlink::Result<()> {
    let mut builder = ClientConfig::builder()
        .host(&args.host)
        .port(args.port)
        .connect_timeout_ms(args.timeout_ms)
        .read_timeout_ms(args.timeout_ms)
        .write_timeout_ms(args.timeout_ms);
    if let Some(password) = &args.password {
        builder = builder.password(password);
    }
    let config = builder.build();

    if let Commands::Listen { bind } = &args.command {
        let bind = bind.as_deref().unwrap_or(&config.notification_addr);
        return listen(bind, config.notification_poll_ms);
    }

    let mut client = Client::connect(&config)?;
    match args.command {
        Commands::State => {
            let state = client.fetch_state()?;
            let json = serde_json::to_string_pretty(&state)
                .map_err(|e| PjlinkError::Io(e.into()))?;
            println!("{}", json);
        }
        Commands::Power { state } => {
            let instruction = match state {
                Switch::On => PowerInstruction::On,
                Switch::Off => PowerInstruction::Off,
            };
            println!("{:?}", client.set_power(instruction)?);
        }
        Commands::Input { code, class2 } => {
            if class2 {
                let input: InputSwitchClass2 = code.parse()?;
                println!("{}", client.set_input_class2(input)?);
            } else {
                let input: InputSwitchClass1 = code.parse()?;
                println!("{}", client.set_input_class1(input)?);
            }
        }
        Commands::Mute { code } => {
            let state: MuteState = code.parse()?;
            println!("{}", client.set_mute_state(state)?);
        }
        Commands::Freeze { state } => {
            let freeze = match state {
                Switch::On => Freeze::On,
                Switch::Off => Freeze::Off,
            };
            println!("{:?}", client.set_freeze(freeze)?);
        }
        Commands::Volume { target, direction } => {
            let adjustment = match direction {
                Direction::Up => VolumeAdjustment::Increase,
                Direction::Down => VolumeAdjustment::Decrease,
            };
            match target {
                VolumeTarget::Speaker => client.set_speaker_volume(adjustment)?,
                VolumeTarget::Microphone => client.set_microphone_volume(adjustment)?,
            }
            println!("OK");
        }
        Commands::Listen { .. } => {}
    }

    Ok(())
}

fn listen(bind: &str, poll_ms: u64) -> pjlink::Result<()> {
    let source = UdpDatagramSource::bind(bind, Duration::from_millis(poll_ms))?;
    let (_listener, notifications) = NotificationListener::spawn_channel(source)?;

    for notification in notifications.iter() {
        match serde_json::to_string(&notification) {
            Ok(json) => println!("{}", json),
            Err(e) => tracing::warn!("Cannot print {}: {}", notification, e),
        }
    }

    Ok(())
}
