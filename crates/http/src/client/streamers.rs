//! Streamer configuration API

use super::{BeaconClient, ClientError};
use crate::types::Streamer;

impl BeaconClient {
    /// Streamers visible to the token's owner.
    ///
    /// Admin tokens see every configured streamer, everyone else at most
    /// their own. The filtering happens server side.
    pub async fn list_streamers(&self, token: &str) -> Result<Vec<Streamer>, ClientError> {
        let request = self.get("/api/streamers/").bearer_auth(token);
        self.send("streamers", request).await
    }
}
