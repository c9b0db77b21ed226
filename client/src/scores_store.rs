use std::path::PathBuf;

use common::config::{
    ConfigContentProvider, ConfigManager, FileContentConfigProvider, YamlConfigSerializer,
};
use common::games::tictactoe::{RoundStatus, Scoreboard};
use common::log_error;

const SCORES_FILE_NAME: &str = "tictactoe_scores.yaml";

fn default_scores_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(SCORES_FILE_NAME);
    }
    PathBuf::from(SCORES_FILE_NAME)
}

pub fn file_scores_store(path: Option<PathBuf>) -> ScoresStore<FileContentConfigProvider> {
    let manager = ConfigManager::from_yaml_file(path.unwrap_or_else(default_scores_path));
    ScoresStore::new(manager)
}

/// Persisted win counters. Broken or unreadable content starts from zero.
pub struct ScoresStore<P: ConfigContentProvider> {
    manager: ConfigManager<P, Scoreboard, YamlConfigSerializer>,
    scores: Scoreboard,
}

impl<P: ConfigContentProvider> ScoresStore<P> {
    pub fn new(manager: ConfigManager<P, Scoreboard, YamlConfigSerializer>) -> Self {
        let scores = manager.get_config_or_default();
        Self { manager, scores }
    }

    pub fn scores(&self) -> Scoreboard {
        self.scores
    }

    pub fn record(&mut self, status: RoundStatus) {
        if !self.scores.record(status) {
            return;
        }
        if let Err(e) = self.manager.set_config(&self.scores) {
            log_error!("Unable to save scores: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::config::MemoryContentConfigProvider;

    fn store_with(content: Option<&str>) -> (ScoresStore<MemoryContentConfigProvider>, MemoryContentConfigProvider) {
        let provider = MemoryContentConfigProvider::new(content.map(str::to_string));
        let manager = ConfigManager::new(provider.clone(), YamlConfigSerializer::new());
        (ScoresStore::new(manager), provider)
    }

    #[test]
    fn test_loads_saved_scores() {
        let (store, _) = store_with(Some("computer: 5\nplayer: 2\n"));
        assert_eq!(store.scores(), Scoreboard { computer: 5, player: 2 });
    }

    #[test]
    fn test_broken_content_starts_from_zero() {
        let (store, _) = store_with(Some("computer: lots\n"));
        assert_eq!(store.scores(), Scoreboard::default());
    }

    #[test]
    fn test_wins_are_saved() {
        let (mut store, provider) = store_with(None);
        store.record(RoundStatus::ComputerWon);
        store.record(RoundStatus::Draw);

        let saved = provider.get_config_content().unwrap().unwrap();
        let saved: Scoreboard = parse_saved(&saved);
        assert_eq!(saved, Scoreboard { computer: 1, player: 0 });
    }

    fn parse_saved(content: &str) -> Scoreboard {
        use common::config::ConfigSerializer;
        YamlConfigSerializer::new().deserialize(content).unwrap()
    }

    #[test]
    fn test_draw_is_not_saved() {
        let (mut store, provider) = store_with(None);
        store.record(RoundStatus::Draw);
        assert_eq!(provider.get_config_content(), Ok(None));
    }
}
