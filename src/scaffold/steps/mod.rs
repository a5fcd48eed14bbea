//! Steps of the scaffolding wizards.

pub mod prompts;
pub mod scaffold_file;

pub use prompts::{ChooseComposeStep, ChoosePlatformStep, ChoosePortStep, ChooseWorkspaceFolderStep};
pub use scaffold_file::{ScaffoldFile, ScaffoldFileStep};
