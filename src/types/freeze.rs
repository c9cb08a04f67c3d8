//! Freeze values

token_enum! {
    /// Freeze state, both the `FREZ` set payload and its get response
    Freeze, "freeze" {
        Off = "0",
        On = "1",
    }
}
