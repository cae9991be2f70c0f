use std::path::{Path, PathBuf};

use crate::{
    cli::{Cli, Commands},
    constants::RECIPE_FILE_EXTENSION,
    error::Result,
    ioutils::expand_home,
    prompt::Console,
    recipe::Recipe,
};

/// Dispatches the parsed command line.
pub fn run(cli: Cli) -> Result<()> {
    let recipe_dir = expand_home(&cli.dir)?;
    match cli.command {
        Commands::New => run_new(recipe_dir),
        Commands::Edit(args) => run_edit(&args.name, recipe_dir),
        Commands::Show(args) => run_show(&args.name, &recipe_dir),
        Commands::List => run_list(&recipe_dir),
    }
}

fn run_new(recipe_dir: PathBuf) -> Result<()> {
    let mut console = Console::stdio();
    let recipe = Recipe::create(&mut console, recipe_dir)?;
    let path = recipe.save()?;
    println!("Saved '{}' to {}.", recipe.name, path.display());
    Ok(())
}

fn run_edit(name: &str, recipe_dir: PathBuf) -> Result<()> {
    let mut console = Console::stdio();
    let mut recipe = Recipe::load(name, &recipe_dir)?;
    while !recipe.check(&mut console)? {}
    let path = recipe.save()?;
    println!("Saved '{}' to {}.", recipe.name, path.display());
    Ok(())
}

fn run_show(name: &str, recipe_dir: &Path) -> Result<()> {
    let recipe = Recipe::load(name, recipe_dir)?;
    let mut console = Console::stdio();
    recipe.display(&mut console)
}

fn run_list(recipe_dir: &Path) -> Result<()> {
    let mut names: Vec<String> = match std::fs::read_dir(recipe_dir) {
        Ok(entries) => entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| {
                path.extension().map(|ext| ext == RECIPE_FILE_EXTENSION).unwrap_or(false)
            })
            .filter_map(|path| {
                path.file_stem().map(|stem| stem.to_string_lossy().into_owned())
            })
            .collect(),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
        Err(e) => return Err(e.into()),
    };
    names.sort();
    if names.is_empty() {
        println!("No recipes found in {}.", recipe_dir.display());
        return Ok(());
    }
    log::debug!("{} recipe file(s) in {}", names.len(), recipe_dir.display());
    for name in &names {
        println!("{name}");
    }
    Ok(())
}
