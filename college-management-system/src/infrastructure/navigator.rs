use async_trait::async_trait;
use domain_identity::{model::vo::Route, service::Navigator};
use infrastructure_command::NavigationCommand;
use tokio::sync::Mutex;

/// Stack of visited paths, starting at the login screen.
pub struct RouteHistory {
    stack: Mutex<Vec<String>>,
}

impl Default for RouteHistory {
    fn default() -> Self {
        Self {
            stack: Mutex::new(vec![Route::Login.path().to_string()]),
        }
    }
}

impl RouteHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn current_path(&self) -> Option<String> {
        self.stack.lock().await.last().cloned()
    }

    pub async fn current(&self) -> Option<Route> {
        self.current_path().await.as_deref().and_then(Route::from_path)
    }

    pub async fn depth(&self) -> usize {
        self.stack.lock().await.len()
    }
}

#[async_trait]
impl Navigator for RouteHistory {
    async fn dispatch(&self, command: NavigationCommand) -> anyhow::Result<()> {
        let mut stack = self.stack.lock().await;
        match command {
            NavigationCommand::Push { path } => stack.push(path),
            NavigationCommand::Replace { path } => {
                stack.pop();
                stack.push(path);
            }
            NavigationCommand::Back => {
                if stack.len() > 1 {
                    stack.pop();
                } else {
                    tracing::warn!("Nothing to go back to.");
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn push_replace_back() {
        let history = RouteHistory::new();
        history
            .dispatch(NavigationCommand::Replace {
                path: Route::AdminDashboard.path().to_string(),
            })
            .await
            .unwrap();
        history
            .dispatch(NavigationCommand::Push {
                path: Route::Clubs.path().to_string(),
            })
            .await
            .unwrap();
        assert_eq!(history.current().await, Some(Route::Clubs));
        assert_eq!(history.depth().await, 2);

        history.dispatch(NavigationCommand::Back).await.unwrap();
        history.dispatch(NavigationCommand::Back).await.unwrap();
        assert_eq!(history.current().await, Some(Route::AdminDashboard));
        assert_eq!(history.depth().await, 1);
    }
}
