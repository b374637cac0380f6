//! Commands to interact with infrastructure

use serde::{Deserialize, Serialize};

/// Command to the navigation framework.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum NavigationCommand {
    /// Open a screen on top of the current one.
    Push {
        /// Screen path.
        path: String,
    },

    /// Replace the current screen, e.g. after login or logout.
    Replace {
        /// Screen path.
        path: String,
    },

    /// Return to the previous screen.
    Back,
}
