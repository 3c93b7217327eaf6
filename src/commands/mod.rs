/// Command layer
///
/// Binds CLI verbs to service calls and displayers. Each family module owns
/// a clap `Subcommand` enum and a `run` function.
pub mod account;
pub mod actions;
pub mod domains;
pub mod firewalls;
pub mod floating_ips;
pub mod load_balancers;
pub mod regions;
pub mod servers;
pub mod vpcs;

use crate::api::ApiClient;
use crate::display::{self, Displayable, OutputFormat};
use crate::error::Result;

/// Shared state handed to every command handler.
pub struct CmdContext {
    pub client: ApiClient,
    pub output: OutputFormat,
}

impl CmdContext {
    pub fn new(client: ApiClient, output: OutputFormat) -> Self {
        Self { client, output }
    }

    /// Render a displayable to stdout in the selected format.
    pub fn display(&self, item: &dyn Displayable) -> Result<()> {
        let mut out = std::io::stdout().lock();
        display::render(item, self.output, &mut out)
    }
}
