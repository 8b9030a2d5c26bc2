use anyhow::{bail, Context};
use bezier_pen::draw::svg::Svg;
use bezier_pen::draw::DrawPrimitive;
use bezier_pen::{EngineConfiguration, Pen, Point};
use std::io::BufRead;
use std::path::PathBuf;

/// Edge length of the printed document
const SIZE: f64 = 400.0;

fn parse_point(line: &str) -> anyhow::Result<Point> {
    let mut coords = line.split_whitespace().map(str::parse::<f64>);
    match (coords.next(), coords.next(), coords.next()) {
        (Some(x), Some(y), None) => Ok(Point::new(x?, y?)),
        _ => bail!("expected two coordinates, got {:?}", line),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => EngineConfiguration::load_from_file(&path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => EngineConfiguration::default(),
    };
    let mut pen = Pen::new(config)?;

    for (number, line) in std::io::stdin().lock().lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let point = parse_point(&line).with_context(|| format!("line {}", number + 1))?;
        pen.on_click(point);
    }

    let mut svg = Svg::new(SIZE);
    svg.add_primitives(pen.primitives());
    println!("{}", svg);
    Ok(())
}
