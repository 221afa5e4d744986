mod playground;
mod snippet;

pub use playground::{
    PlaygroundController, PlaygroundEvent, PlaygroundState, RunStatus, Timing,
    DEFAULT_AUTO_ADVANCE, DEFAULT_RUN_DELAY,
};
pub use snippet::{CatalogError, Direction, Snippet, SnippetCatalog};
