//! Embeds git metadata (`VERGEN_GIT_SHA`, `VERGEN_GIT_DIRTY`) for the startup version line.

use vergen_gitcl::{Emitter, GitclBuilder};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let git = GitclBuilder::all_git()?;
    Emitter::default().add_instructions(&git)?.emit()?;
    Ok(())
}
