use std::io::{self, BufRead, Write};

use recruitment_dashboard::config::Config;
use recruitment_dashboard::models::candidate::CandidateStatus;
use recruitment_dashboard::models::row::{CandidateRef, CandidateRow};
use recruitment_dashboard::screens::candidates::{CandidatesScreen, ScreenState};
use recruitment_dashboard::screens::{self, dashboard, jobs, profile, Notification, Route};
use recruitment_dashboard::services::candidate_service::DetailKind;
use recruitment_dashboard::services::projection_service;
use recruitment_dashboard::App;
use tracing::info;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let config = Config::from_env()?;
    let mut app = App::from_config(config)?;
    info!(jobs = app.store.read().len(), "dashboard seeded");

    let mut route = Route::Login;
    let mut candidates = CandidatesScreen::new();
    let mut page: usize = 0;
    // Row selection refers to the table as last rendered; mutations resolve
    // through stable ids, so a stale selection errors instead of misfiring.
    let mut rendered: Vec<CandidateRow> = Vec::new();

    println!("Recruitment dashboard. Type 'help' for commands.");
    render(route, &app, &candidates, page, &mut rendered);

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let parts: Vec<&str> = line.trim().splitn(3, ' ').collect();
        match parts.as_slice() {
            [""] => continue,
            ["quit"] | ["exit"] => break,
            ["help"] => print_help(),
            ["login", user, pass] => match app.login(user, pass) {
                Ok(()) => {
                    route = Route::Dashboard;
                    println!("Welcome, {}!", user);
                }
                Err(err) => println!("{}", err.user_message()),
            },
            ["logout"] => {
                app.logout();
                route = Route::Login;
                println!("Logged out.");
            }
            ["go", page] => {
                let requested = match *page {
                    "dashboard" => Route::Dashboard,
                    "jobs" => Route::Jobs,
                    "candidates" => Route::Candidates,
                    other => {
                        println!("Unknown page: {}", other);
                        continue;
                    }
                };
                route = screens::guard(requested, app.session.as_ref());
                if route == Route::Login && requested != Route::Login {
                    println!("Please log in first.");
                }
            }
            ["search"] => {
                candidates.set_search("");
                page = 0;
            }
            ["search", rest @ ..] => {
                candidates.set_search(rest.join(" "));
                page = 0;
            }
            ["status", value] => {
                match *value {
                    "all" => candidates.set_status_filter(None),
                    other => match other.parse::<CandidateStatus>() {
                        Ok(status) => candidates.set_status_filter(Some(status)),
                        Err(err) => {
                            println!("{}", err);
                            continue;
                        }
                    },
                }
                page = 0;
            }
            ["sort"] => candidates.toggle_name_sort(),
            ["page", n] => match n.parse::<usize>() {
                Ok(p) if p > 0 => page = p - 1,
                _ => println!("Not a page number: {}", n),
            },
            ["view", n] => {
                if let Some(row) = pick(&rendered, n) {
                    candidates.open_view(row);
                }
            }
            ["edit", n] => {
                if let Some(row) = pick(&rendered, n) {
                    candidates.open_edit(row);
                    println!("Editing. Use 'set <field> <value>', then 'submit' or 'cancel'.");
                }
            }
            ["set", field, value] => match candidates.draft_mut() {
                Some(draft) => match *field {
                    "name" => draft.name = value.to_string(),
                    "skill" => draft.skill = value.to_string(),
                    "status" => draft.status = value.to_string(),
                    "photo" => draft.photo = Some(value.to_string()),
                    other => println!("Unknown field: {}", other),
                },
                None => println!("No edit in progress."),
            },
            ["submit"] => notify(candidates.submit_edit(&mut app.store)),
            ["cancel"] | ["close"] => candidates.close(),
            ["delete", n] => {
                if let Some(row) = pick(&rendered, n) {
                    notify(candidates.delete(&mut app.store, &row));
                }
            }
            ["detail", n, kind] => {
                let kind = match *kind {
                    "mock" => DetailKind::Mock,
                    "job" => DetailKind::Job,
                    "scheduled" => DetailKind::Scheduled,
                    other => {
                        println!("Unknown detail: {}", other);
                        continue;
                    }
                };
                if let Some(row) = pick(&rendered, n) {
                    candidates.open_detail(row, kind);
                }
            }
            ["profile", n] => {
                if let Some(row) = pick(&rendered, n) {
                    route = screens::guard(Route::Profile, app.session.as_ref());
                    if route == Route::Profile {
                        match profile::profile(&app.store, &CandidateRef::from(&row)) {
                            Ok(view) => print_profile(&view),
                            Err(err) => println!("{}", err.user_message()),
                        }
                        route = Route::Candidates;
                    }
                }
            }
            _ => println!("Unknown command. Type 'help'."),
        }

        render(route, &app, &candidates, page, &mut rendered);
    }

    Ok(())
}

fn print_help() {
    println!("  login <user> <pass>      sign in");
    println!("  go dashboard|jobs|candidates");
    println!("  search [term]            filter candidates by name or skill");
    println!("  status approved|pending|rejected|all");
    println!("  sort                     toggle the name sort");
    println!("  page <n>                 jump to a table page");
    println!("  view|edit|delete <row>   act on a table row");
    println!("  detail <row> mock|job|scheduled");
    println!("  set <field> <value>      change a field of the open edit form");
    println!("  submit | cancel          finish or abandon the edit");
    println!("  profile <row>            open a candidate's profile");
    println!("  logout | quit");
}

fn pick(rendered: &[CandidateRow], n: &str) -> Option<CandidateRow> {
    let index: usize = match n.parse() {
        Ok(i) => i,
        Err(_) => {
            println!("Not a row number: {}", n);
            return None;
        }
    };
    match rendered.get(index) {
        Some(row) => Some(row.clone()),
        None => {
            println!("No such row: {}", index);
            None
        }
    }
}

fn notify(note: Notification) {
    match note {
        Notification::Success(msg) => println!("[ok] {}", msg),
        Notification::Error(msg) => println!("[error] {}", msg),
    }
}

fn render(
    route: Route,
    app: &App,
    candidates: &CandidatesScreen,
    page: usize,
    rendered: &mut Vec<CandidateRow>,
) {
    match route {
        Route::Login => {
            if app.session.is_none() {
                println!("-- Login required --");
            }
        }
        Route::Dashboard => {
            let stats = dashboard::stats(&app.store);
            println!("-- Dashboard --");
            println!(
                "jobs: {}  candidates: {}  approved: {}  pending: {}  rejected: {}",
                stats.total_jobs,
                stats.total_candidates,
                stats.approved,
                stats.pending,
                stats.rejected
            );
        }
        Route::Jobs => {
            println!("-- Job Opportunities --");
            for job in jobs::summaries(&app.store) {
                println!("{:<4} {:<28} {} candidate(s)", job.id, job.title, job.candidate_count);
            }
        }
        Route::Candidates => {
            println!("-- All Job Candidates --");
            if !candidates.search_term().is_empty() {
                println!("(search: {:?})", candidates.search_term());
            }
            if let Some(status) = candidates.status_filter() {
                println!("(status: {})", status);
            }
            let all = candidates.rows(&app.store);
            let pages = projection_service::page_count(all.len(), app.config.page_size);
            *rendered = projection_service::paginate(&all, page, app.config.page_size).to_vec();
            println!("(page {}/{}, {} candidate(s))", page + 1, pages, all.len());
            for (i, row) in rendered.iter().enumerate() {
                println!(
                    "{:>3}  {:<18} {:<14} {:<22} {:<9} mock:{:<3} job:{:<3}",
                    i,
                    row.name,
                    row.skill,
                    row.job_title,
                    row.status,
                    row.mock_interviews,
                    row.job_interviews
                );
            }
            match candidates.state() {
                ScreenState::Viewing(row) => {
                    println!("[view] {}: {} ({}), {}", row.name, row.skill, row.job_title, row.status);
                }
                ScreenState::Editing { draft, .. } => {
                    println!(
                        "[edit] name={:?} skill={:?} status={:?} photo={:?}",
                        draft.name, draft.skill, draft.status, draft.photo
                    );
                }
                ScreenState::ShowingDetail { .. } => {
                    if let Some(view) = candidates.detail_view() {
                        println!("[detail] {} / {}: {}", view.name, view.label, view.value);
                    }
                }
                ScreenState::Idle => {}
            }
        }
        Route::Profile => {}
    }
}

fn print_profile(view: &screens::profile::ProfileView) {
    println!("-- Profile: {} --", view.name);
    println!("skill:  {}", view.skill);
    println!("job:    {}", view.job_title);
    println!("status: {}", view.status);
    if let Some(photo) = &view.photo {
        println!("photo:  {}", photo);
    }
    println!("mock interviews: {}", view.mock_interviews);
    println!("job interviews:  {}", view.job_interviews);
    if let Some(slot) = &view.scheduled_interview {
        println!("scheduled: {}", slot);
    }
}
