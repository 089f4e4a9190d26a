use crate::errors::CoreError;
use crate::models::session::ClientSession;

use super::format;

/// High-level storage operations: save/load the durable client session
/// (bearer token + cached planning preferences) to/from bytes or files.
///
/// The session cache holds no password-protectable secrets, so unlike a
/// financial data file it is stored unencrypted; the bearer token is
/// short-lived and scoped by the server.
pub struct StorageManager;

impl StorageManager {
    /// Serialize a session to raw bytes (portable, platform-independent).
    ///
    /// Flow: ClientSession → bincode → TPLN format bytes
    pub fn save_to_bytes(session: &ClientSession) -> Result<Vec<u8>, CoreError> {
        let payload = bincode::serialize(session)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize session: {e}")))?;
        Ok(format::write_file(format::CURRENT_VERSION, &payload))
    }

    /// Deserialize a session from raw file bytes.
    ///
    /// Flow: TPLN bytes → parse header → bincode → ClientSession
    pub fn load_from_bytes(data: &[u8]) -> Result<ClientSession, CoreError> {
        let (_header, payload) = format::read_file(data)?;
        let session: ClientSession = bincode::deserialize(payload)
            .map_err(|e| CoreError::Deserialization(format!("Failed to deserialize session: {e}")))?;
        Ok(session)
    }

    /// Save the session to a file on disk.
    pub fn save_to_file(session: &ClientSession, path: &str) -> Result<(), CoreError> {
        let bytes = Self::save_to_bytes(session)?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Load the session from a file on disk.
    pub fn load_from_file(path: &str) -> Result<ClientSession, CoreError> {
        let bytes = std::fs::read(path)?;
        Self::load_from_bytes(&bytes)
    }
}
