use pokedex::error::Result;

/// Run the schema command, printing the SDL or writing it to a file
pub fn run(output: Option<String>) -> Result<()> {
    let sdl = pokedex::schema::sdl();

    match output {
        Some(path) => pokedex::schema::export_sdl(&sdl, &path)?,
        None => println!("{}", sdl),
    }

    Ok(())
}
