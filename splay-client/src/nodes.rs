//! Node search endpoint

use tracing::debug;

use crate::JobServerClient;
use crate::error::Result;

impl JobServerClient {
    /// Search for nodes matching a query
    ///
    /// # Arguments
    /// * `query` - The search expression, forwarded to the server verbatim
    ///
    /// # Returns
    /// Matching node names in server order.
    pub async fn search_nodes(&self, query: &str) -> Result<Vec<String>> {
        let url = format!("{}/api/nodes", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("q", query)])
            .send()
            .await?;

        let names: Vec<String> = self.handle_response(response).await?;
        debug!("Node search '{}' matched {} node(s)", query, names.len());

        Ok(names)
    }
}
