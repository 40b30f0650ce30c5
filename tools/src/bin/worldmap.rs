use std::path::Path;
use std::str::FromStr;
use std::sync::Mutex;

use anyhow::Context;
use clap::{App, Arg, ArgMatches};
use quarry_anvil::{render_world_map, MapBounds};
use quarry_tools::colours::BlockColours;
use quarry_tools::ImageSink;

fn arg<T>(matches: &ArgMatches, name: &str) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    matches
        .value_of(name)
        .unwrap()
        .parse()
        .with_context(|| format!("{} must be a number", name))
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let matches = App::new("worldmap")
        .about("Renders a top-down map of a world to worldmap.png")
        .arg(Arg::with_name("world").takes_value(true).required(true))
        .arg(
            Arg::with_name("center-x")
                .takes_value(true)
                .default_value("0"),
        )
        .arg(
            Arg::with_name("center-z")
                .takes_value(true)
                .default_value("0"),
        )
        .arg(
            Arg::with_name("width")
                .takes_value(true)
                .default_value("256"),
        )
        .arg(
            Arg::with_name("height")
                .takes_value(true)
                .default_value("256"),
        )
        .arg(Arg::with_name("zoom").takes_value(true).default_value("1"))
        .arg(
            Arg::with_name("info-size")
                .takes_value(true)
                .default_value("10"),
        )
        .get_matches();

    let world = Path::new(matches.value_of("world").unwrap());
    let center_x: isize = arg(&matches, "center-x")?;
    let center_z: isize = arg(&matches, "center-z")?;
    let width: isize = arg(&matches, "width")?;
    let height: isize = arg(&matches, "height")?;
    let zoom: u32 = arg(&matches, "zoom")?;
    let info_size: u32 = arg(&matches, "info-size")?;

    anyhow::ensure!(width > 0 && height > 0, "width and height must be positive");
    anyhow::ensure!(zoom > 0, "zoom must be positive");
    anyhow::ensure!(
        world.join("region").is_dir(),
        "no region directory under {}",
        world.display()
    );

    let bounds = MapBounds {
        center_x,
        center_z,
        width,
        height,
    };
    let sink = Mutex::new(ImageSink::new(width as u32, height as u32, zoom));

    println!("Rendering map ...");
    render_world_map(world, bounds, &BlockColours, &sink);

    println!("Saving map as \"worldmap.png\" ...");
    let image = sink.into_inner().unwrap().into_image();
    image
        .save("worldmap.png")
        .context("failed to write worldmap.png")?;

    if info_size > 0 {
        println!("Center: ({}, {})", center_x, center_z);
        println!("Size: ({}, {})", width, height);
    }

    Ok(())
}
