//! PJLink client
//!
//! Owns one connection and runs strictly sequential request/response
//! exchanges over it.
//!
//! ## Exchange
//! ```text
//! Client                                   Projector
//!   │ ◀────────────── "PJLINK 1 498e4a67" ───── │  banner
//!   │ ── "PJLINK 2" ──────────────────────────▶ │  security probe
//!   │ ◀────────────── "PJLINK ERRA" ─────────── │  level 1
//!   │ ── digest + "%1CLSS ?" ─────────────────▶ │
//!   │ ◀────────────── "%1CLSS=2" ────────────── │  authenticated
//!   │ ── "%1POWR 1" ──────────────────────────▶ │
//!   │ ◀────────────── "%1POWR=OK" ───────────── │
//! ```

use std::fmt;

use tracing::{debug, info, trace, warn};

use super::transport::{TcpTransport, Transport};
use crate::auth::{
    AuthState, Authenticator, HandshakeStep, OsRandom, RandomSource, AUTH_REJECTED, SECURITY_PROBE,
};
use crate::config::ClientConfig;
use crate::error::{AuthError, FormatError, PjlinkError, ProtocolError, Result};
use crate::protocol::codec::TERMINATOR;
use crate::protocol::{
    decode, encode, encode_message, format, parse, Body, Command, GetResponse, Message, Response,
    SetResponse, Value, MAX_MESSAGE_SIZE,
};
use crate::state::{Class1State, Class2State, InputTerminal, ProjectorState};
use crate::types::{
    Class, ErrorCode, ErrorStatus, FilterUsageTime, Freeze, InputResolution, InputSwitchClass1,
    InputSwitchClass2, InputSwitches, InputTerminalName, LampsStatus, ManufacturerName,
    ModelNumbers, MuteState, OtherInformation, Password, PowerInstruction, PowerStatus,
    ProductName, ProjectorName, Resolution, SerialNumber, SoftwareVersion, VolumeAdjustment, OK,
};

/// Shortest frame accepted from the projector (one character plus CR)
const MIN_FRAME_SIZE: usize = 2;

/// Outcome of a `try_` query: the value, or the projector's error code
pub type QueryResult<T> = std::result::Result<T, ErrorCode>;

/// Generates a `try_` query returning the error code as a value and a
/// convenience query mapping it to [`PjlinkError::QueryFailed`]
macro_rules! queries {
    ($(
        $(#[$meta:meta])*
        $name:ident, $try_name:ident: $class:ident $command:ident => $variant:ident($ty:ty);
    )*) => {
        $(
            $(#[$meta])*
            pub fn $try_name(&mut self) -> Result<QueryResult<$ty>> {
                match self.get(Class::$class, Command::$command, None)? {
                    GetResponse::Success(Value::$variant(value)) => Ok(Ok(value)),
                    GetResponse::Success(_) => {
                        Err(ProtocolError::UnexpectedValue(Command::$command).into())
                    }
                    GetResponse::Failure(code) => Ok(Err(code)),
                }
            }

            $(#[$meta])*
            pub fn $name(&mut self) -> Result<$ty> {
                self.$try_name()?.map_err(|code| PjlinkError::QueryFailed {
                    command: Command::$command,
                    code,
                })
            }
        )*
    };
}

/// Blocking PJLink client over a [`Transport`]
pub struct Client<T: Transport = TcpTransport> {
    transport: T,
    auth: Authenticator,
}

impl Client<TcpTransport> {
    /// Connect to the projector named by `config` and authenticate
    pub fn connect(config: &ClientConfig) -> Result<Self> {
        let password = config.password()?;
        let transport = TcpTransport::connect(config)?;
        info!("Connected to projector at {}", transport.peer_addr());
        Client::handshake(transport, password, &mut OsRandom)
    }
}

impl<T: Transport> Client<T> {
    /// Run the handshake over an open transport
    ///
    /// When the projector requires authentication the first request is a
    /// class query, so the connection is authenticated on return.
    pub fn handshake<R: RandomSource + ?Sized>(
        transport: T,
        password: Option<Password>,
        random: &mut R,
    ) -> Result<Self> {
        let mut client = Client {
            transport,
            auth: Authenticator::new(password),
        };

        let banner = client.receive_line()?;
        trace!(banner = %banner, "Received banner");
        if client.auth.receive_banner(&banner)? == HandshakeStep::SendProbe {
            client.send_line(SECURITY_PROBE)?;
            let answer = client.receive_line()?;
            trace!(answer = %answer, "Received security probe answer");
            client.auth.receive_probe_response(&answer, random)?;
        }

        if client.auth.prefix().is_some() {
            let class = client.projector_class()?;
            info!(%class, "Authenticated with projector");
        } else {
            info!("Projector does not require authentication");
        }
        Ok(client)
    }

    pub fn auth_state(&self) -> &AuthState {
        self.auth.state()
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    pub fn into_transport(self) -> T {
        self.transport
    }

    // =========================================================================
    // Exchange
    // =========================================================================

    /// Send one request and read its response
    ///
    /// Fails with [`AuthError::Rejected`] when the projector answers
    /// `PJLINK ERRA`, and with a [`ProtocolError`] when the response does
    /// not answer `request`.
    pub fn exchange(&mut self, request: &Message) -> Result<Response> {
        let command = request.command();
        if !request.is_request() {
            return Err(ProtocolError::NotARequest(command).into());
        }

        let message = encode_message(request)?;
        if message.len() > MAX_MESSAGE_SIZE {
            return Err(PjlinkError::MessageTooLong {
                length: message.len(),
                max: MAX_MESSAGE_SIZE,
            });
        }

        let mut bytes = Vec::with_capacity(message.len() + 96);
        if let Some(prefix) = self.auth.prefix() {
            bytes.extend_from_slice(prefix.as_bytes());
        }
        bytes.extend_from_slice(&message);
        trace!(request = %format(request), "Sending request");
        self.transport.send(&bytes)?;

        let line = self.receive_line()?;
        trace!(response = %line, "Received response");
        if line == AUTH_REJECTED {
            warn!(%command, "Projector rejected authentication");
            return Err(AuthError::Rejected.into());
        }

        let awaiting_set = request.is_set_request();
        let kind_mismatch = || ProtocolError::ResponseKindMismatch {
            command,
            expected: if awaiting_set { "set" } else { "get" },
        };
        let response = match parse(&line, Some(awaiting_set)) {
            Ok(response) => response,
            // A value answering a set, or OK answering a get
            Err(FormatError::InvalidSetResponse { command: actual, .. })
            | Err(FormatError::InvalidParameter {
                command: actual, ..
            }) if actual == command && answers_other_kind(&line, awaiting_set) => {
                self.auth.mark_authenticated();
                return Err(kind_mismatch().into());
            }
            Err(e) => return Err(e.into()),
        };
        self.auth.mark_authenticated();

        if response.command() != command {
            return Err(ProtocolError::CommandMismatch {
                expected: command,
                actual: response.command(),
            }
            .into());
        }
        let Body::Response(response) = response.into_body() else {
            return Err(ProtocolError::UnexpectedRequest(command).into());
        };
        if matches!(response, Response::Set(_)) != awaiting_set {
            return Err(kind_mismatch().into());
        }

        debug!(%command, "Exchange complete");
        Ok(response)
    }

    /// Issue a get request
    pub fn get(
        &mut self,
        class: Class,
        command: Command,
        parameter: Option<Value>,
    ) -> Result<GetResponse> {
        let request = match parameter {
            Some(parameter) => Message::get_with(class, command, parameter)?,
            None => Message::get(class, command)?,
        };
        match self.exchange(&request)? {
            Response::Get(outcome) => Ok(outcome),
            Response::Set(_) => Err(ProtocolError::ResponseKindMismatch {
                command,
                expected: "get",
            }
            .into()),
        }
    }

    /// Issue a set request
    pub fn set(&mut self, class: Class, command: Command, value: Value) -> Result<SetResponse> {
        let request = Message::set(class, command, value)?;
        match self.exchange(&request)? {
            Response::Set(outcome) => Ok(outcome),
            Response::Get(_) => Err(ProtocolError::ResponseKindMismatch {
                command,
                expected: "set",
            }
            .into()),
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    queries! {
        power_status, try_power_status: One Power => PowerStatus(PowerStatus);
        input_switch_class1, try_input_switch_class1: One InputSwitch => InputSwitchClass1(InputSwitchClass1);
        input_switch_class2, try_input_switch_class2: Two InputSwitch => InputSwitchClass2(InputSwitchClass2);
        mute_state, try_mute_state: One AvMute => MuteState(MuteState);
        error_status, try_error_status: One ErrorStatus => ErrorStatus(ErrorStatus);
        lamps_status, try_lamps_status: One Lamp => LampsStatus(LampsStatus);
        input_list_class1, try_input_list_class1: One InputList => InputListClass1(InputSwitches<InputSwitchClass1>);
        input_list_class2, try_input_list_class2: Two InputList => InputListClass2(InputSwitches<InputSwitchClass2>);
        projector_name, try_projector_name: One Name => ProjectorName(ProjectorName);
        manufacturer_name, try_manufacturer_name: One Manufacturer => ManufacturerName(ManufacturerName);
        product_name, try_product_name: One ProductName => ProductName(ProductName);
        other_information, try_other_information: One OtherInformation => OtherInformation(OtherInformation);
        /// Highest class the projector implements
        projector_class, try_projector_class: One Class => Class(Class);
        serial_number, try_serial_number: Two SerialNumber => SerialNumber(SerialNumber);
        software_version, try_software_version: Two SoftwareVersion => SoftwareVersion(SoftwareVersion);
        input_resolution, try_input_resolution: Two InputResolution => InputResolution(InputResolution);
        recommended_resolution, try_recommended_resolution: Two RecommendedResolution => Resolution(Resolution);
        filter_usage_time, try_filter_usage_time: Two FilterUsageTime => FilterUsageTime(FilterUsageTime);
        lamp_replacement_models, try_lamp_replacement_models: Two LampReplacementModel => ModelNumbers(ModelNumbers);
        filter_replacement_models, try_filter_replacement_models: Two FilterReplacementModel => ModelNumbers(ModelNumbers);
        freeze_status, try_freeze_status: Two Freeze => Freeze(Freeze);
    }

    /// Label of one class 2 input
    pub fn try_input_terminal_name(
        &mut self,
        input: InputSwitchClass2,
    ) -> Result<QueryResult<InputTerminalName>> {
        let parameter = Value::InputSwitchClass2(input);
        match self.get(Class::Two, Command::InputTerminalName, Some(parameter))? {
            GetResponse::Success(Value::InputTerminalName(name)) => Ok(Ok(name)),
            GetResponse::Success(_) => {
                Err(ProtocolError::UnexpectedValue(Command::InputTerminalName).into())
            }
            GetResponse::Failure(code) => Ok(Err(code)),
        }
    }

    /// Label of one class 2 input
    pub fn input_terminal_name(&mut self, input: InputSwitchClass2) -> Result<InputTerminalName> {
        self.try_input_terminal_name(input)?
            .map_err(|code| PjlinkError::QueryFailed {
                command: Command::InputTerminalName,
                code,
            })
    }

    /// Read everything the projector's class exposes
    ///
    /// Any failed query aborts the fetch.
    pub fn fetch_state(&mut self) -> Result<ProjectorState> {
        let class = self.projector_class()?;
        debug!(%class, "Fetching projector state");

        let state = match class {
            Class::One => ProjectorState::Class1(Class1State {
                power: self.power_status()?,
                input: self.input_switch_class1()?,
                mute: self.mute_state()?,
                error_status: self.error_status()?,
                lamps: self.lamps_status()?,
                inputs: self.input_list_class1()?,
                name: self.projector_name()?,
                manufacturer: self.manufacturer_name()?,
                product: self.product_name()?,
                other_information: self.other_information()?,
            }),
            Class::Two => {
                let mut state = Class2State {
                    power: self.power_status()?,
                    input: self.input_switch_class2()?,
                    mute: self.mute_state()?,
                    error_status: self.error_status()?,
                    lamps: self.lamps_status()?,
                    inputs: self.input_list_class2()?,
                    name: self.projector_name()?,
                    manufacturer: self.manufacturer_name()?,
                    product: self.product_name()?,
                    other_information: self.other_information()?,
                    serial_number: self.serial_number()?,
                    software_version: self.software_version()?,
                    input_resolution: self.input_resolution()?,
                    recommended_resolution: self.recommended_resolution()?,
                    filter_usage_time: self.filter_usage_time()?,
                    lamp_replacement_models: self.lamp_replacement_models()?,
                    filter_replacement_models: self.filter_replacement_models()?,
                    freeze: self.freeze_status()?,
                    input_terminals: Vec::new(),
                };
                for &input in state.inputs.inputs() {
                    let name = self.input_terminal_name(input)?;
                    state.input_terminals.push(InputTerminal { input, name });
                }
                ProjectorState::Class2(state)
            }
        };

        debug!(%class, "Projector state fetched");
        Ok(state)
    }

    // =========================================================================
    // Sets
    // =========================================================================

    /// Switch power and return the status read back afterwards
    pub fn set_power(&mut self, instruction: PowerInstruction) -> Result<PowerStatus> {
        let outcome = self.set(Class::One, Command::Power, Value::PowerInstruction(instruction))?;
        let verified = self.power_status();
        finish_set(Command::Power, outcome, verified)
    }

    pub fn set_input_class1(&mut self, input: InputSwitchClass1) -> Result<InputSwitchClass1> {
        let outcome = self.set(Class::One, Command::InputSwitch, Value::InputSwitchClass1(input))?;
        let verified = self.input_switch_class1();
        finish_set(Command::InputSwitch, outcome, verified)
    }

    pub fn set_input_class2(&mut self, input: InputSwitchClass2) -> Result<InputSwitchClass2> {
        let outcome = self.set(Class::Two, Command::InputSwitch, Value::InputSwitchClass2(input))?;
        let verified = self.input_switch_class2();
        finish_set(Command::InputSwitch, outcome, verified)
    }

    pub fn set_mute_state(&mut self, state: MuteState) -> Result<MuteState> {
        let outcome = self.set(Class::One, Command::AvMute, Value::MuteState(state))?;
        let verified = self.mute_state();
        finish_set(Command::AvMute, outcome, verified)
    }

    pub fn set_freeze(&mut self, freeze: Freeze) -> Result<Freeze> {
        let outcome = self.set(Class::Two, Command::Freeze, Value::Freeze(freeze))?;
        let verified = self.freeze_status();
        finish_set(Command::Freeze, outcome, verified)
    }

    /// Step the speaker volume; the projector cannot report the level
    pub fn set_speaker_volume(&mut self, adjustment: VolumeAdjustment) -> Result<()> {
        let outcome = self.set(
            Class::Two,
            Command::SpeakerVolume,
            Value::VolumeAdjustment(adjustment),
        )?;
        finish_set(Command::SpeakerVolume, outcome, Ok(()))
    }

    /// Step the microphone volume; the projector cannot report the level
    pub fn set_microphone_volume(&mut self, adjustment: VolumeAdjustment) -> Result<()> {
        let outcome = self.set(
            Class::Two,
            Command::MicrophoneVolume,
            Value::VolumeAdjustment(adjustment),
        )?;
        finish_set(Command::MicrophoneVolume, outcome, Ok(()))
    }

    // =========================================================================
    // Framing
    // =========================================================================

    fn send_line(&mut self, line: &str) -> Result<()> {
        let mut bytes = encode(line)?;
        bytes.push(TERMINATOR);
        self.transport.send(&bytes)
    }

    fn receive_line(&mut self) -> Result<String> {
        let frame = self.transport.receive(MIN_FRAME_SIZE, MAX_MESSAGE_SIZE)?;
        let mut line = decode(&frame);
        if line.ends_with(TERMINATOR as char) {
            line.pop();
        }
        Ok(line)
    }
}

/// Combine a set outcome with its verifying read
///
/// A failed set is reported only after the read has run.
fn finish_set<V: fmt::Debug>(
    command: Command,
    outcome: SetResponse,
    verified: Result<V>,
) -> Result<V> {
    let SetResponse::Failure(code) = outcome else {
        return verified;
    };
    match &verified {
        Ok(value) => warn!(%command, %code, "Set failed, projector reports {:?}", value),
        Err(e) => warn!(%command, %code, "Set failed, verification also failed: {}", e),
    }
    Err(PjlinkError::SetFailed { command, code })
}

/// Whether `line` is a well-formed response of the other kind
fn answers_other_kind(line: &str, awaiting_set: bool) -> bool {
    if awaiting_set {
        parse(line, Some(false)).is_ok()
    } else {
        line.split_once('=').is_some_and(|(_, payload)| payload == OK)
    }
}
