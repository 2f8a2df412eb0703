//! Viewer binary: load once, render all players, then serve per-player
//! queries from the console while the window keeps pumping events.

use std::sync::mpsc::TryRecvError;

use anyhow::Result;
use macroquad::prelude::{KeyCode, is_key_pressed, next_frame};

use hotzone::{
    AnalysisConfig, AnalysisContext, CONFIG_FILE, FloorPlan, PlayerColors, PositionTable,
    SelectorCommand, canvas_from_image, draw_canvas, load_label_font, parse_selector_input,
    spawn_input_thread, window_conf,
};

#[macroquad::main(window_conf)]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("hotzone: {:#}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let config = AnalysisConfig::load(CONFIG_FILE)?;
    let table = PositionTable::load(&config.csv_path)?;
    let floor_plan = FloorPlan::load(&config.image_path)?;
    println!("{}", table.summary());

    let colors = PlayerColors::assign(&table.players());
    let font = load_label_font(config.font_path.as_deref());
    let context = AnalysisContext {
        config,
        table,
        floor_plan,
        colors,
        font,
    };

    let mut canvases = vec![canvas_from_image("All players", &context.render_all())];
    let mut active = 0usize;

    let input = spawn_input_thread();

    loop {
        match input.try_recv() {
            Ok(line) => match parse_selector_input(&line) {
                SelectorCommand::Exit => break,
                SelectorCommand::Select(number) => {
                    let resolved = context.colors.resolve_alias(number).map(str::to_string);
                    match resolved {
                        Some(player_id) => {
                            println!("Rendering dwell map for {}...", player_id);
                            let image = context.render(&[player_id.as_str()]);
                            canvases.push(canvas_from_image(&player_id, &image));
                            active = canvases.len() - 1;
                        }
                        None => println!("No player with number {}, try again.", number),
                    }
                }
                SelectorCommand::Invalid => {
                    println!("Please enter a whole number (e.g. 1) or \"exit\".");
                }
            },
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => break,
        }

        if is_key_pressed(KeyCode::Escape) || is_key_pressed(KeyCode::Q) {
            break;
        }
        if is_key_pressed(KeyCode::Left) && active > 0 {
            active -= 1;
        }
        if is_key_pressed(KeyCode::Right) && active + 1 < canvases.len() {
            active += 1;
        }

        draw_canvas(&canvases[active], active, canvases.len());
        next_frame().await;
    }

    Ok(())
}
