use clap::Parser;
use color_eyre::{eyre::eyre, Result};
use log::{info, warn};
use reqwest::{blocking::Client, StatusCode, Url};
use snake_referee::{
    gridsnake::models::{ErrorBody, GameState, NewGame, ValidateRequest},
    playtest::plan_route,
};

/// Plays scripted rounds against a running referee.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct PlayOptions {
    /// Base URL of the referee
    #[arg(long, default_value = "http://localhost:3000")]
    url:    Url,
    #[arg(long, default_value_t = 11)]
    width:  u32,
    #[arg(long, default_value_t = 11)]
    height: u32,
    /// How many fruit to go after
    #[arg(long, default_value_t = 10)]
    rounds: u64,
}

fn new_game(client: &Client, options: &PlayOptions) -> Result<GameState> {
    let NewGame { state } = client
        .get(options.url.join("new")?)
        .query(&[("width", options.width), ("height", options.height)])
        .send()?
        .error_for_status()?
        .json()?;
    Ok(state)
}

fn play_round(
    client: &Client,
    options: &PlayOptions,
    state: &GameState,
) -> Result<Option<GameState>> {
    let ticks = plan_route(state)
        .ok_or_else(|| eyre!("no route to the fruit at {}", state.fruit))?;

    let resp = client
        .post(options.url.join("validate")?)
        .json(&ValidateRequest {
            state: state.clone(),
            ticks,
        })
        .send()?;

    if resp.status() == StatusCode::OK {
        return Ok(Some(resp.json()?));
    }

    let status = resp.status();
    let ErrorBody { error } = resp.json()?;
    warn!("referee said {status}: {error}");
    Ok(None)
}

fn main() -> Result<()> {
    color_eyre::install()?;
    pretty_env_logger::init();

    let options = PlayOptions::parse();
    let client = Client::new();

    let mut state = new_game(&client, &options)?;
    info!(
        "playing game {} on {}x{}",
        state.game_id, state.width, state.height
    );

    for round in 1..=options.rounds {
        match play_round(&client, &options, &state)? {
            Some(next) => state = next,
            None => break,
        }
        info!(
            "round {round}: score {}, next fruit at {}",
            state.score, state.fruit
        );
    }

    println!("game {} finished with score {}", state.game_id, state.score);

    Ok(())
}
