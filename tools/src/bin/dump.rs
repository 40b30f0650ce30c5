use anyhow::Context;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args: Vec<_> = std::env::args().skip(1).collect();
    if args.is_empty() || args.len() > 2 {
        eprintln!("Usage: dump <file> [tag-path]");
        std::process::exit(2);
    }
    let tag_path = args.get(1).map(String::as_str).unwrap_or("");

    let root =
        quarry_nbt::from_file(&args[0]).with_context(|| format!("failed to read {}", args[0]))?;

    match root.get(tag_path) {
        Some(tag) => println!("{}", tag),
        None => {
            eprintln!("there is no tag \"{}\" in file \"{}\"", tag_path, args[0]);
            std::process::exit(1);
        }
    }

    Ok(())
}
