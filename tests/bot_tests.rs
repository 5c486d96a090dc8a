//! The sparring bot against a real controller.

use std::time::Duration;

use tetrissh::bot;
use tetrissh::play::{MatchController, MatchState, Matchmaker, Msg, PlayConfig};

fn fast() -> PlayConfig {
    PlayConfig {
        fall_interval: Duration::from_millis(5),
        look_interval: Duration::from_millis(5),
        ..PlayConfig::default()
    }
}

#[tokio::test]
async fn bot_pairs_plays_and_leaves_when_player_quits() {
    let config = fast();
    let (matchmaker, worker) = Matchmaker::new(4);
    tokio::spawn(worker.run());
    let sparring = tokio::spawn(bot::spar(matchmaker.clone(), config.clone(), 9));

    let mut player = MatchController::new(&matchmaker, &config, 3);
    for _ in 0..400 {
        player.update(Msg::LookTick);
        if player.state() == MatchState::Running {
            break;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    assert_eq!(player.state(), MatchState::Running);

    // the bot publishes as it plays
    let opponent = player.opponent().cloned().expect("opponent");
    let start = opponent.version();
    tokio::time::timeout(Duration::from_secs(2), async {
        while opponent.version() == start {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    })
    .await
    .expect("bot never moved");

    player.update(Msg::Quit);
    let score = tokio::time::timeout(Duration::from_secs(2), sparring)
        .await
        .expect("bot did not stop")
        .expect("bot panicked");
    assert_eq!(score % 100, 0);
}
