use anyhow::Context;

use kindling::game::title::GraphicsApi;
use kindling::game::{Game, GameConfig};
use kindling::log::{Logger, LoggerConfig};
use kindling::platform::dialog::AlertLevel;

pub fn main() -> anyhow::Result<()> {
    let logger = Logger::new(LoggerConfig::default());
    logger.open().context("Could not open logger")?;

    let config = GameConfig {
        name: "Sandbox".to_string(),
        api: GraphicsApi::Software,
        ..GameConfig::default()
    };
    let mut game = Game::new(config, logger.clone());

    if let Err(error) = game.run() {
        let _ = game.alert(AlertLevel::Error, &error.to_string(), None);
        let _ = logger.close();
        return Err(error).context("Game exited with an error");
    }

    Ok(())
}
