use crate::types::ApConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProfileError {
    Io,
}

impl ProfileError {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Io => "io",
        }
    }
}

/// Credential storage for the last station profile the manager connected with.
pub trait ProfileStore {
    fn init(&mut self) -> Result<(), ProfileError>;
    fn write(&mut self, config: &ApConfig) -> Result<(), ProfileError>;
}

/// Store used when profile persistence is switched off.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullProfileStore;

impl ProfileStore for NullProfileStore {
    fn init(&mut self) -> Result<(), ProfileError> {
        Ok(())
    }

    fn write(&mut self, _config: &ApConfig) -> Result<(), ProfileError> {
        Ok(())
    }
}
