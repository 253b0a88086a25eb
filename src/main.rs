//! Laptop showcase. Runs the laptop_stage app.

use bevy::app::AppExit;
use laptop_stage::prelude::ShowcaseBuilder;

fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let mut app = ShowcaseBuilder::new().with_env()?.build();
    match app.run() {
        AppExit::Success => Ok(()),
        AppExit::Error(code) => anyhow::bail!("showcase exited with code {code}"),
    }
}
