use clap::Parser;
use encyclo::application::{
    init::init, list_entries, manage_config::ConfigService, random_entry, search_entries,
    view_entry, CreateEntryService, CreateOutcome, EditEntryService, EditOutcome, SearchPage,
    ViewPage,
};
use encyclo::cli::{
    format_entry_list, format_entry_page, format_flash, format_form_errors,
    format_search_results, Cli, Commands, ContentSource,
};
use encyclo::domain::{EditEntryForm, NewEntryForm};
use encyclo::error::{EncycloError, Result};
use encyclo::infrastructure::{EntryStore, FileSystemRepository, WikiRepository};
use encyclo::logging::{init_logging, Verbosity};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{IsTerminal, Read};

fn main() {
    let cli = Cli::parse();

    init_logging(Verbosity::from_flags(cli.quiet, cli.verbose));

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Some(command) = cli.command else {
        println!("encyclo - A small Markdown encyclopedia");
        println!("Use --help for usage information");
        return Ok(());
    };

    match command {
        Commands::Init { path, entries_dir } => {
            init(&path, &entries_dir)?;
            println!("Initialized encyclo wiki at {}", path.display());
            println!("Entries directory: {}", entries_dir);
            Ok(())
        }
        Commands::List => {
            let repo = FileSystemRepository::discover()?;
            println!("{}", format_entry_list(&list_entries(&repo)?).trim_end());
            Ok(())
        }
        Commands::Show { title, raw } => {
            let repo = FileSystemRepository::discover()?;
            if raw {
                let content = repo
                    .get_entry(&title)?
                    .ok_or_else(|| EncycloError::EntryNotFound(title.clone()))?;
                print!("{}", content);
                Ok(())
            } else {
                show_entry(&repo, &title)
            }
        }
        Commands::Search { query } => {
            let repo = FileSystemRepository::discover()?;
            match search_entries(&repo, &query)? {
                SearchPage::Redirect { title } => show_entry(&repo, &title),
                SearchPage::Results { query, matches } => {
                    println!("{}", format_search_results(&query, &matches).trim_end());
                    Ok(())
                }
            }
        }
        Commands::New { title, source } => {
            let repo = FileSystemRepository::discover()?;
            let config = repo.load_config()?;
            let service = CreateEntryService::new(&repo, config.max_title_length);

            let outcome = match read_content(&source)? {
                Some(content) => service.submit(NewEntryForm::new(title, content))?,
                None => service.display(),
            };

            match outcome {
                CreateOutcome::FormDisplayed { .. } => {
                    println!("Provide the entry content with --content, --file, or on stdin");
                    Ok(())
                }
                CreateOutcome::ValidationFailed { errors, .. } => {
                    eprint!("{}", format_form_errors(&errors));
                    Err(EncycloError::InvalidForm(errors.to_string()))
                }
                CreateOutcome::TitleConflict { form, flash } => {
                    eprintln!("{}", format_flash(&flash));
                    Err(EncycloError::TitleConflict(form.title))
                }
                CreateOutcome::Saved { title } => show_entry(&repo, &title),
            }
        }
        Commands::Edit { title, source } => {
            let repo = FileSystemRepository::discover()?;
            let service = EditEntryService::new(&repo);

            let outcome = match read_content(&source)? {
                Some(content) => service.submit(&title, EditEntryForm::new(content))?,
                None => service.display(&title)?,
            };

            match outcome {
                EditOutcome::NotFound { title, .. } => Err(EncycloError::EntryNotFound(title)),
                EditOutcome::FormDisplayed { form, .. } => {
                    print!("{}", form.content);
                    Ok(())
                }
                EditOutcome::ValidationFailed { errors, .. } => {
                    eprint!("{}", format_form_errors(&errors));
                    Err(EncycloError::InvalidForm(errors.to_string()))
                }
                EditOutcome::Saved { title, flash } => {
                    println!("{}", format_flash(&flash));
                    show_entry(&repo, &title)
                }
            }
        }
        Commands::Random { seed } => {
            let repo = FileSystemRepository::discover()?;
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let title = random_entry(&repo, &mut rng)?;
            show_entry(&repo, &title)
        }
        Commands::Config { key, value, list } => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("entries_dir = {}", config.entries_dir);
                println!("max_title_length = {}", config.max_title_length);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
                Ok(())
            } else {
                println!("Usage: encyclo config [--list | <key> [<value>]]");
                println!("Valid keys: entries_dir, max_title_length, created");
                Ok(())
            }
        }
    }
}

/// Print the rendered page for `title`
fn show_entry(repo: &FileSystemRepository, title: &str) -> Result<()> {
    match view_entry(repo, title)? {
        ViewPage::Found { title, html } => {
            print!("{}", format_entry_page(&title, &html));
            Ok(())
        }
        ViewPage::NotFound { title, .. } => Err(EncycloError::EntryNotFound(title)),
    }
}

/// Collect submitted content. `None` means nothing was submitted: no flag was
/// given and stdin is an interactive terminal.
fn read_content(source: &ContentSource) -> Result<Option<String>> {
    if let Some(content) = &source.content {
        return Ok(Some(content.clone()));
    }
    if let Some(path) = &source.file {
        return Ok(Some(std::fs::read_to_string(path)?));
    }

    let mut stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Ok(None);
    }
    let mut content = String::new();
    stdin.read_to_string(&mut content)?;
    Ok(Some(content))
}
