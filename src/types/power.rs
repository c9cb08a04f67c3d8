//! Power values

token_enum! {
    /// Power state reported by `POWR ?`
    PowerStatus, "power status" {
        Off = "0",
        On = "1",
        Cooling = "2",
        WarmUp = "3",
    }
}

token_enum! {
    /// Power instruction sent with `POWR`, also carried by power notifications
    PowerInstruction, "power instruction" {
        Off = "0",
        On = "1",
    }
}

impl PowerStatus {
    /// Whether the projector is on or heading there
    pub fn is_powered(self) -> bool {
        matches!(self, PowerStatus::On | PowerStatus::WarmUp)
    }
}

impl From<PowerInstruction> for PowerStatus {
    fn from(instruction: PowerInstruction) -> Self {
        match instruction {
            PowerInstruction::Off => PowerStatus::Off,
            PowerInstruction::On => PowerStatus::On,
        }
    }
}
