//! A walk through construction, arithmetic, division and rendering.
//!
//! Run with `cargo run -p realpoly --example arithmetic_tour`.

use log::{info, LevelFilter};
use realpoly::prelude::*;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

fn main() -> Result<(), PolyError> {
    TermLogger::init(
        LevelFilter::Debug,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .ok();

    let p: Polynomial = "3 0 2".parse()?;
    let q = Polynomial::from_coefficients(&[1.0, 1.0]);
    info!("P = {p}");
    info!("Q = {q}");

    println!("P + Q = {}", &p + &q);
    println!("P - Q = {}", &p - &q);
    println!("P * Q = {}", &p * &q);

    let (quot, rem) = p.div_rem(&q);
    println!("P / Q = {quot}");
    println!("P % Q = {rem}");
    println!("P(2) = {}", p.evaluate(2.0));

    let third = Polynomial::from_coefficients(&[1.0, 0.0, 0.0, 0.0]).divide(&Polynomial::constant(3.0));
    println!("x^3 / 3 = {}", third.render_with(&FixedFormatter::new(4)));

    let square = Polynomial::from_coefficients(&[1.0, -1.0]).pow(2);
    match quadratic_roots_of(&square)? {
        QuadraticRoots::Repeated(r) => println!("roots of {square}: {r} (twice)"),
        other => println!("roots of {square}: {other:?}"),
    }

    Ok(())
}
