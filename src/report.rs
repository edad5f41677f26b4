use crate::analyzer::Analysis;
use crate::profile::PlayerProfile;
use crate::session::Session;

fn signed(value: f64) -> String {
    if value > 0.0 {
        format!("+{:.1}", value)
    } else {
        format!("{:.1}", value)
    }
}

pub fn print_analysis(analysis: &Analysis, top_n: usize) {
    let tier = analysis.tier.label();
    let issues = analysis.top_issues(top_n);

    println!();
    println!("{}", "=".repeat(50));
    println!(
        "  {} - {}",
        analysis.club.display_name(analysis.wedge_loft),
        tier
    );
    println!("{}", "=".repeat(50));

    if issues.is_empty() {
        println!();
        println!("  Excellent numbers!");
        println!(
            "  Your data looks very solid for {}. Focus on consistency, course",
            tier
        );
        println!("  management, and keeping these numbers under pressure.");
    } else {
        println!();
        println!("  Your focus areas:");
        for (index, issue) in issues.iter().enumerate() {
            println!();
            println!("  Priority #{}: {}", index + 1, issue.title);
            println!("  The Issue: {}", issue.problem);
            println!("  The Fix:   {}", issue.fix);
        }
        if analysis.issues.len() > issues.len() {
            println!();
            println!(
                "  ({} more issue(s) not shown, use --top to see them)",
                analysis.issues.len() - issues.len()
            );
        }
    }

    let averages = &analysis.typical_averages;
    if !averages.is_empty() {
        println!();
        println!("{}", "-".repeat(40));
        println!("  Typical averages for {}", tier);
        if let Some(launch) = averages.launch_angle {
            println!("  Launch Angle: {:.1}°", launch);
        }
        if let Some(spin) = averages.spin_rate {
            println!("  Spin Rate:    {:.0} rpm", spin);
        }
        if let Some(aoa) = averages.aoa {
            println!("  Attack Angle: {}°", signed(aoa));
        }
    }

    let targets = &analysis.targets;
    println!();
    println!("{}", "-".repeat(40));
    println!("  Optimal targets for {}", tier);
    println!(
        "  Smash Factor: {:.2}  ({:.2}-{:.2})",
        targets.smash.optimal, targets.smash.min, targets.smash.max
    );
    println!(
        "  Launch Angle: {:.1}°  ({:.1}-{:.1}°)",
        targets.launch_angle.optimal, targets.launch_angle.min, targets.launch_angle.max
    );
    println!(
        "  Spin Rate:    {:.0} rpm  ({:.0}-{:.0})",
        targets.spin_rate.optimal, targets.spin_rate.min, targets.spin_rate.max
    );
    println!("  Attack Angle: {}°", signed(targets.aoa.optimal));
    println!("  Face to Path: within ±{:.1}°", targets.face_to_path.max);
    println!("{}", "-".repeat(40));
    println!();
}

pub fn print_history(sessions: &[Session]) {
    if sessions.is_empty() {
        println!("No sessions saved yet. Save an analysis with --save to start tracking progress.");
        return;
    }

    for session in sessions {
        let local = session.timestamp.with_timezone(&chrono::Local);
        println!("{}", "-".repeat(40));
        println!(
            "  {}  {}  [id {}]",
            session.club.display_name(session.wedge_loft),
            local.format("%Y-%m-%d %H:%M"),
            session.id
        );

        let data = &session.data;
        let mut metrics = format!(
            "  Smash: {:.2}  Launch: {:.1}°  Spin: {:.0}",
            data.smash, data.launch_angle, data.spin_rate
        );
        if let Some(aoa) = data.aoa {
            metrics.push_str(&format!("  AoA: {}°", signed(aoa)));
        }
        println!("{}", metrics);

        if let Some(issue) = session.top_issue() {
            println!("  Top Issue: {}", issue.title);
        }
        if !session.notes.is_empty() {
            println!("  Notes: {}", session.notes);
        }
    }
    println!("{}", "-".repeat(40));
}

pub fn print_profile(profile: &PlayerProfile) {
    println!("  Name:        {}", profile.name.as_deref().unwrap_or("-"));
    if let Some(age) = profile.age {
        println!("  Age:         {}", age);
    }
    println!("  Handicap:    {:.1}", profile.handicap);
    if let Some(rounds) = profile.rounds {
        println!("  Rounds/year: {}", rounds);
    }
    println!("  Player type: {:?}", profile.player_type);
    println!("  Skill tier:  {}", profile.skill_tier());
}
