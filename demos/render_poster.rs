//! Generates a random poster, saves it as `poster.svg`, then simulates the
//! "new poster" button by regenerating the session and saving `poster2.svg`.

use gouache::{Session, Sketch};
use rand::thread_rng;

fn main() -> std::io::Result<()> {
    let mut entropy = thread_rng();

    let mut session = Session::generate(&mut entropy);
    println!("current seed: {:.6}", session.seed());
    Sketch::from_poster_with_seed_caption(&session.poster()).save_to_svg("poster.svg")?;

    session.regenerate(&mut entropy);
    println!("regenerated seed: {:.6}", session.seed());
    Sketch::from_poster_with_seed_caption(&session.poster()).save_to_svg("poster2.svg")?;

    Ok(())
}
