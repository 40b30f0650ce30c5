use std::path::Path;

use anyhow::Context;
use clap::{App, Arg};
use quarry_anvil::MapItem;
use quarry_tools::ImageSink;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let matches = App::new("mapitem")
        .about("Renders an in-game map item to map_<nr>.png")
        .arg(Arg::with_name("world").takes_value(true).required(true))
        .arg(Arg::with_name("map-nr").takes_value(true).required(true))
        .arg(Arg::with_name("zoom").takes_value(true).default_value("5"))
        .arg(
            Arg::with_name("info-size")
                .takes_value(true)
                .default_value("0"),
        )
        .get_matches();

    let world = matches.value_of("world").unwrap();
    let map_nr: u32 = matches
        .value_of("map-nr")
        .unwrap()
        .parse()
        .context("map-nr must be a number")?;
    let zoom: u32 = matches
        .value_of("zoom")
        .unwrap()
        .parse()
        .context("zoom must be a number")?;
    let info_size: u32 = matches
        .value_of("info-size")
        .unwrap()
        .parse()
        .context("info-size must be a number")?;
    anyhow::ensure!(zoom > 0, "zoom must be positive");

    let item = MapItem::read(Path::new(world), map_nr)
        .with_context(|| format!("failed to read map {} of {}", map_nr, world))?;

    let mut sink = ImageSink::new(item.width as u32, item.height as u32, zoom);
    item.render(&mut sink);

    let out = format!("map_{}.png", map_nr);
    sink.into_image()
        .save(&out)
        .with_context(|| format!("failed to write {}", out))?;

    if info_size > 0 {
        println!("scale={}", item.scale);
        println!("dimension={}", item.dimension);
        println!("xCenter={}", item.x_center);
        println!("zCenter={}", item.z_center);
    }

    Ok(())
}
