use std::env;
use std::io::{self, Write};

use anyhow::Context;
use composer_core::{Direction, HslColor, Session, presets};

fn print_help() {
    println!(
        r#"Palette Composer CLI

            Commands:
            repl
            presets
            preview <preset> [speed] [fwd|rev]

            Examples:
            cargo run -p composer_cli -- repl
            cargo run -p composer_cli -- preview rainbow 50 rev
        "#
    );
}

fn print_palette(session: &Session) {
    let view = session.editor.view();
    println!("Palette ({} of {}):", view.colors.len(), composer_core::MAX_COLORS);
    for (i, c) in view.colors.iter().enumerate() {
        let marker = if i == view.selected { "*" } else { " " };
        println!(
            " {marker} #{:>2} | hsl({:>5.1}, {:>5.1}, {:>5.1}) | {}",
            i,
            c.h,
            c.s,
            c.l,
            c.to_hex()
        );
    }
}

fn print_config(session: &Session) -> anyhow::Result<()> {
    println!("{}", session.config().to_json_pretty()?);
    Ok(())
}

/// The selected color as a starting point for hue/sat/light edits.
fn selected_color(session: &Session) -> HslColor {
    let view = session.editor.view();
    view.colors[view.selected]
}

fn repl() -> anyhow::Result<()> {
    let mut session = Session::new();

    println!("Palette composer v{}", composer_core::version());
    println!("Type 'help' for commands. 'quit' to exit.");

    loop {
        print!("pc> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            // EOF (Ctrl+D)
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        // before splitting into "cmd words"
        match composer_core::editcmd::try_apply_editor_line(line, &mut session) {
            composer_core::editcmd::ApplyStatus::Applied => {
                print_palette(&session);
                continue;
            }
            composer_core::editcmd::ApplyStatus::Incomplete => {
                println!("(editor) incomplete input…");
                continue;
            }
            composer_core::editcmd::ApplyStatus::NotEditor => {
                // fall through to named commands (help, add, preset, etc.)
            }
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        let cmd = parts[0].to_lowercase();

        match cmd.as_str() {
            "help" => {
                println!(
                    r#"Commands:
                        <index>               select entry
                        <index> @ <h> <s> <l> select + replace entry
                        list                  show palette entries
                        add | +               insert after selection (hue +30)
                        del | -               remove selection
                        hsl <h> <s> <l>       replace selected color
                        hue <deg>             change hue of selection
                        sat <0..100>          change saturation of selection
                        light <0..100>        change lightness of selection
                        speed <0..100>
                        period <ms>
                        dir [fwd|rev]         set or toggle direction
                        preset <name>
                        presets
                        config                print the JSON payload
                        quit
                        "#
                );
            }
            "quit" | "exit" => break,

            "list" => print_palette(&session),

            "add" | "+" => {
                if !session.editor.can_insert() {
                    println!("Palette is full ({} entries).", composer_core::MAX_COLORS);
                    continue;
                }
                session.editor.insert_after_selection();
                print_palette(&session);
            }

            "del" | "-" => {
                if !session.editor.can_remove() {
                    println!("Palette needs at least one entry.");
                    continue;
                }
                session.editor.remove_selected();
                print_palette(&session);
            }

            "select" => {
                if parts.len() != 2 {
                    println!("Usage: select <index>");
                    continue;
                }
                let index: usize = parts[1].parse()?;
                session.editor.select(index);
                print_palette(&session);
            }

            "hsl" => {
                if parts.len() != 4 {
                    println!("Usage: hsl <h> <s> <l>");
                    continue;
                }
                let h: f64 = parts[1].parse()?;
                let s: f64 = parts[2].parse()?;
                let l: f64 = parts[3].parse()?;
                session.editor.replace_selected(HslColor::new(h, s, l));
                print_palette(&session);
            }

            "hue" | "sat" | "light" => {
                if parts.len() != 2 {
                    println!("Usage: {cmd} <value>");
                    continue;
                }
                let value: f64 = parts[1].parse()?;
                let mut c = selected_color(&session);
                match cmd.as_str() {
                    "hue" => c.h = value,
                    "sat" => c.s = value,
                    _ => c.l = value,
                }
                session.editor.replace_selected(c);
                print_palette(&session);
            }

            "speed" => {
                if parts.len() != 2 {
                    println!("Usage: speed <0..100>");
                    continue;
                }
                let speed: u32 = parts[1].parse()?;
                session.set_speed(speed);
                println!(
                    "Speed {} -> period {} ms",
                    session.speed(),
                    session.config().period_ms
                );
            }

            "period" => {
                if parts.len() != 2 {
                    println!("Usage: period <ms>");
                    continue;
                }
                let ms: u32 = parts[1].parse()?;
                session.set_period_ms(ms);
                println!(
                    "Period {} ms -> speed {}",
                    session.config().period_ms,
                    session.speed()
                );
            }

            "dir" | "direction" => {
                session.direction = match parts.get(1).map(|s| s.to_lowercase()).as_deref() {
                    None => session.direction.reversed(),
                    Some("fwd" | "forward") => Direction::Forward,
                    Some("rev" | "reverse") => Direction::Reverse,
                    Some(other) => {
                        println!("Unknown direction '{other}'. Use fwd or rev.");
                        continue;
                    }
                };
                println!("Direction: {:?}", session.direction);
            }

            "presets" => {
                println!("Presets:");
                for name in presets::names() {
                    let colors = presets::by_name(name).unwrap_or_default();
                    println!("  {name} ({} colors)", colors.len());
                }
            }

            "preset" => {
                if parts.len() != 2 {
                    println!("Usage: preset <name>");
                    continue;
                }
                if session.load_preset(parts[1]).is_none() {
                    println!("Unknown preset '{}'. Try: presets", parts[1]);
                    continue;
                }
                print_palette(&session);
            }

            "config" => print_config(&session)?,

            _ => println!("Unknown command '{cmd}'. Type 'help'."),
        }
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        print_help();
        return Ok(());
    }

    match args[1].as_str() {
        "repl" => repl()?,

        "presets" => {
            for name in presets::names() {
                println!("{name}");
            }
        }

        "preview" => {
            let name = args.get(2).context("missing <preset>")?;
            let mut session = Session::new();
            session
                .load_preset(name)
                .with_context(|| format!("unknown preset '{name}'"))?;

            if let Some(speed) = args.get(3) {
                let speed: u32 = speed.parse().context("speed must be a number")?;
                session.set_speed(speed);
            }
            if let Some(dir) = args.get(4) {
                session.direction = match dir.as_str() {
                    "fwd" | "forward" => Direction::Forward,
                    "rev" | "reverse" => Direction::Reverse,
                    other => anyhow::bail!("unknown direction '{other}'"),
                };
            }

            print_config(&session)?;
        }

        _ => print_help(),
    }

    Ok(())
}
