//! REPL (Read-Eval-Print Loop) for the interactive boardroom

use crate::ConsoleFormatter;
use crate::progress::DeliberationSpinner;
use boardroom_application::{TurnDispatcher, TurnError};
use boardroom_domain::BoardSession;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;

/// Cosmetic pause before a newly summoned executive speaks
const REVEAL_DELAY: Duration = Duration::from_millis(800);

/// Profile defaults applied when the CEO leaves a field blank
const DEFAULT_INDUSTRY: &str = "Tecnología";
const DEFAULT_COUNTRY: &str = "Chile";

/// Interactive boardroom REPL
pub struct BoardRepl {
    dispatcher: TurnDispatcher,
    session: BoardSession,
    show_progress: bool,
    history_file: Option<PathBuf>,
}

impl BoardRepl {
    /// Create a new BoardRepl over a caller-owned session
    pub fn new(dispatcher: TurnDispatcher, session: BoardSession) -> Self {
        Self {
            dispatcher,
            session,
            show_progress: true,
            history_file: None,
        }
    }

    /// Set whether to show the deliberation spinner
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Override the readline history file location
    pub fn with_history_file(mut self, path: Option<PathBuf>) -> Self {
        self.history_file = path;
        self
    }

    /// Run the interactive REPL
    pub async fn run(mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        let history_path = self
            .history_file
            .clone()
            .or_else(|| dirs::data_dir().map(|p| p.join("boardroom").join("history.txt")));

        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.onboard(&mut rl)?;
        self.print_welcome();

        loop {
            let readline = rl.readline("CEO> ");

            match readline {
                Ok(line) => {
                    let line = line.trim();

                    if line.is_empty() {
                        continue;
                    }

                    if line.starts_with('/') {
                        if self.handle_command(line) {
                            break;
                        }
                        continue;
                    }

                    let _ = rl.add_history_entry(line);
                    self.process_message(line).await;
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Se levanta la sesión.");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    /// Ask for any profile field still blank, applying defaults
    fn onboard(&mut self, rl: &mut DefaultEditor) -> RlResult<()> {
        if self.session.context().company_name.trim().is_empty() {
            let name = rl.readline("Nombre de la empresa: ")?;
            self.session.set_company_name(name.trim());
        }
        if self.session.context().industry.trim().is_empty() {
            let industry = rl.readline(&format!("Industria [{}]: ", DEFAULT_INDUSTRY))?;
            let industry = industry.trim();
            self.session.set_industry(if industry.is_empty() {
                DEFAULT_INDUSTRY
            } else {
                industry
            });
        }
        if self.session.context().country.trim().is_empty() {
            let country = rl.readline(&format!("País [{}]: ", DEFAULT_COUNTRY))?;
            let country = country.trim();
            self.session.set_country(if country.is_empty() {
                DEFAULT_COUNTRY
            } else {
                country
            });
        }
        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│              Sala de Juntas                 │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("{}", ConsoleFormatter::welcome(self.session.context()));
        println!();
        println!("{}", ConsoleFormatter::board(&self.session));
        println!("Escriba /help para ver los comandos disponibles.");
        println!();
    }

    /// Handle slash commands. Returns true if the REPL should exit.
    fn handle_command(&mut self, line: &str) -> bool {
        let (cmd, rest) = match line.split_once(' ') {
            Some((cmd, rest)) => (cmd, rest.trim()),
            None => (line, ""),
        };

        match cmd {
            "/quit" | "/exit" | "/q" => {
                println!("Se levanta la sesión.");
                return true;
            }
            "/help" | "/h" | "/?" => {
                println!();
                println!("Comandos:");
                println!("  /help, /h, /?        - Mostrar esta ayuda");
                println!("  /board               - Ver la mesa y quién está presente");
                println!("  /company <nombre>    - Cambiar el nombre de la empresa");
                println!("  /industry <rubro>    - Cambiar la industria");
                println!("  /country <país>      - Cambiar el país");
                println!("  /goal <objetivo>     - Agregar un objetivo de la empresa");
                println!("  /doc <referencia>    - Agregar un documento de contexto");
                println!("  /reset               - Reiniciar la sesión completa");
                println!("  /quit, /exit, /q     - Salir");
                println!();
            }
            "/board" => {
                println!();
                println!("{}", ConsoleFormatter::board(&self.session));
            }
            "/company" if !rest.is_empty() => {
                self.session.set_company_name(rest);
                println!("Empresa: {}", rest);
            }
            "/industry" if !rest.is_empty() => {
                self.session.set_industry(rest);
                println!("Industria: {}", rest);
            }
            "/country" if !rest.is_empty() => {
                self.session.set_country(rest);
                println!("País: {}", rest);
            }
            "/goal" if !rest.is_empty() => {
                self.session.add_goal(rest);
                println!("Objetivo agregado: {}", rest);
            }
            "/doc" if !rest.is_empty() => {
                self.session.add_document(rest);
                println!("Documento agregado: {}", rest);
            }
            "/reset" => {
                self.session.reset();
                println!("Sesión reiniciada.");
            }
            _ => {
                println!("Comando desconocido: {}", line);
                println!("Escriba /help para ver los comandos disponibles.");
            }
        }
        false
    }

    async fn process_message(&mut self, text: &str) {
        let spinner = DeliberationSpinner::start(self.show_progress);
        let result = self.dispatcher.dispatch(&mut self.session, text).await;
        spinner.finish();

        match result {
            Ok(outcome) => {
                debug!(
                    action = outcome.decision.action.as_wire_str(),
                    "Turn dispatched"
                );
                // The first appended turn echoes the user's own message
                for turn in outcome.appended.iter().skip(1) {
                    println!("{}", ConsoleFormatter::turn(turn));
                    // Give a newly summoned executive a beat before speaking
                    if turn.is_notice() && outcome.summoned.is_some() {
                        tokio::time::sleep(REVEAL_DELAY).await;
                    }
                }
                println!();
            }
            Err(TurnError::Invalid(e)) => {
                eprintln!("{}", e.to_string().yellow());
            }
            Err(TurnError::Busy) => {
                // Latch, not a queue: the submission is simply refused
                eprintln!("{}", "Ya hay un turno en curso.".yellow());
            }
        }
    }
}
