//! CLI smoke driver.
//!
//! # Responsibility
//! - Verify `interlexi_core` linkage and bundled data without a UI shell.
//! - Walk every screen through the same navigation events the shell sends.
//!
//! Usage: `interlexi_cli [ASSET_DIR]` (falls back to `INTERLEXI_ASSET_DIR`,
//! then `./assets`).

use interlexi_core::{
    AppConfig, NavEvent, NavigationError, Navigator, PhrasebookApp, ScreenView,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("interlexi_core ping={}", interlexi_core::ping());
    println!("interlexi_core version={}", interlexi_core::core_version());

    let config = match std::env::args().nth(1) {
        Some(dir) if !dir.trim().is_empty() => AppConfig::with_asset_dir(dir.trim()),
        _ => AppConfig::from_env(),
    };

    let mut app = match PhrasebookApp::boot(&config) {
        Ok(app) => app,
        Err(err) => {
            eprintln!("unable to load content: {err}");
            return ExitCode::FAILURE;
        }
    };
    for warning in app.warnings() {
        eprintln!("warning: {warning}");
    }

    match walk(app.navigator_mut()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("navigation failed: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Home -> contents -> every topic -> back out to home.
fn walk(nav: &mut Navigator) -> Result<(), NavigationError> {
    print_screen(nav)?;
    nav.dispatch(NavEvent::ViewContents)?;
    print_screen(nav)?;

    let topic_ids = nav
        .catalog()
        .topics()
        .iter()
        .map(|topic| topic.id.clone())
        .collect::<Vec<_>>();
    for id in topic_ids {
        nav.dispatch(NavEvent::SelectTopic(id))?;
        print_screen(nav)?;
        nav.dispatch(NavEvent::Back)?;
    }

    nav.dispatch(NavEvent::Back)?;
    print_screen(nav)
}

fn print_screen(nav: &Navigator) -> Result<(), NavigationError> {
    let slide = nav.last_slide().map_or("none", |slide| slide.label());
    println!();
    println!("== {} (slide={slide})", nav.current());

    match nav.view()? {
        ScreenView::Home(home) => {
            println!("{}", home.title);
            match &home.logo {
                Some(path) => println!("logo: {}", path.display()),
                None => println!("logo: <default>"),
            }
            println!("[{}]", home.contents_label);
        }
        ScreenView::TableOfContents(toc) => {
            println!("{} (height={})", toc.title, toc.layout_height());
            for entry in &toc.entries {
                println!("  [{}] {}", entry.topic_id, entry.label);
            }
            println!("[{}]", toc.back_label);
        }
        ScreenView::TopicDetail(screen) => {
            println!("{} (height={})", screen.title(), screen.layout_height());
            for line in screen.phrase_lines() {
                println!("  {line}");
            }
            println!("[{}]", screen.back_label());
        }
    }
    Ok(())
}
