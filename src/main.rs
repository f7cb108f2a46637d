// Entrypoint for the CLI application.
// - Keeps `main` small: load credentials, fetch the repo list, run the
//   selection menu, clone the chosen repo.
// - Returns `anyhow::Result` to simplify error handling for the prototype.

use gitpick::{api::ApiClient, creds::CredentialStore, git, ui};

fn main() -> anyhow::Result<()> {
    // Load credentials from disk, or prompt and persist them on a first
    // run (or whenever the stored pair is unreadable).
    let creds = CredentialStore::new().load()?;

    // Create the API client configured by the environment variable
    // `GITPICK_API_URL` or default to the public GitHub API.
    let api = ApiClient::from_env()?;
    let repos = api.list_repos(&creds)?;

    // Blocks until the user picks a repo or asks to quit.
    match ui::choose(&repos)? {
        ui::Selection::Chosen(i) => git::clone(&repos[i], &creds.username, &creds.password)?,
        ui::Selection::Quit => {
            println!("See ya");
            println!();
            std::process::exit(1);
        }
    }

    Ok(())
}
