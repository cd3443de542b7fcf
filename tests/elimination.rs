//! Integration tests for the elimination analyzer and the division report.

mod common;

use baseball_elimination::{
    analyze, certificate_of_elimination, division_report, is_eliminated, DivisionError,
    Standings, TeamStatus,
};
use common::{brute_force_eliminated, random_division, restrict, subset_eliminates, teams4, teams5};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn certificate(s: &Standings, team: &str) -> Option<Vec<String>> {
    certificate_of_elimination(s, team).unwrap()
}

#[test]
fn teams4_results() {
    let s = teams4();
    assert!(!is_eliminated(&s, "Atlanta").unwrap());
    assert!(!is_eliminated(&s, "New_York").unwrap());
    assert!(is_eliminated(&s, "Philadelphia").unwrap());
    assert!(is_eliminated(&s, "Montreal").unwrap());

    assert_eq!(certificate(&s, "Atlanta"), None);
    assert_eq!(certificate(&s, "New_York"), None);
    assert_eq!(
        certificate(&s, "Philadelphia"),
        Some(vec!["Atlanta".to_string(), "New_York".to_string()])
    );
    // Atlanta passes Montreal outright; the min cut adds the rivals that feed Atlanta's games.
    assert_eq!(
        certificate(&s, "Montreal").unwrap(),
        ["Atlanta", "Philadelphia", "New_York"]
    );
}

#[test]
fn teams5_only_detroit_is_eliminated_by_everyone() {
    let s = teams5();
    for team in ["New_York", "Baltimore", "Boston", "Toronto"] {
        assert!(!is_eliminated(&s, team).unwrap(), "{} reported eliminated", team);
        assert_eq!(certificate(&s, team), None);
    }
    assert!(is_eliminated(&s, "Detroit").unwrap());
    assert_eq!(
        certificate(&s, "Detroit").unwrap(),
        ["New_York", "Baltimore", "Boston", "Toronto"]
    );
}

#[test]
fn small_division_certificate_covers_the_leaders() {
    let input = "\
4
A 83 71 8 0 1 6 1
B 80 79 3 1 0 0 0
C 78 78 6 6 0 0 0
D 77 82 3 1 0 0 0
";
    let s = Standings::parse(input).unwrap();
    assert!(is_eliminated(&s, "D").unwrap());
    let cert = certificate(&s, "D").unwrap();
    assert!(cert.contains(&"A".to_string()));
    assert!(cert.contains(&"C".to_string()));
    assert!(!cert.contains(&"D".to_string()));
}

#[test]
fn leader_with_no_games_left_among_rivals_is_not_eliminated() {
    let input = "3\nLeader 90 60 4 0 0 0\nSecond 83 65 4 0 0 0\nThird 80 70 4 0 0 0\n";
    let s = Standings::parse(input).unwrap();
    assert!(!is_eliminated(&s, "Leader").unwrap());
    assert_eq!(certificate(&s, "Leader"), None);
    // Third can reach 84 at best; Leader already has 90.
    assert_eq!(certificate(&s, "Third"), Some(vec!["Leader".to_string()]));
    assert!(is_eliminated(&s, "Third").unwrap());
}

#[test]
fn tie_for_first_is_not_elimination() {
    let input = "2\nA 10 0 0 0 0\nB 8 2 2 0 0\n";
    let s = Standings::parse(input).unwrap();
    assert!(!is_eliminated(&s, "B").unwrap());
    assert_eq!(certificate(&s, "B"), None);
}

#[test]
fn rivals_splitting_their_games_can_still_eliminate() {
    // C can reach 10. A and B play 4 more times: between them they must reach 9 + 9 + 4 = 22 > 20.
    let input = "3\nA 9 0 4 0 4 0\nB 9 0 4 4 0 0\nC 8 0 2 0 0 0\n";
    let s = Standings::parse(input).unwrap();
    assert!(is_eliminated(&s, "C").unwrap());
    assert_eq!(certificate(&s, "C"), Some(vec!["A".to_string(), "B".to_string()]));
}

#[test]
fn unknown_team_fails_every_query() {
    let s = teams4();
    let unknown = DivisionError::UnknownTeam("Boston".to_string());
    assert_eq!(is_eliminated(&s, "Boston").unwrap_err(), unknown);
    assert_eq!(certificate_of_elimination(&s, "Boston").unwrap_err(), unknown);
    assert_eq!(analyze(&s, "Boston").unwrap_err(), unknown);
}

#[test]
fn queries_are_idempotent() {
    let s = teams5();
    for name in s.team_names() {
        assert_eq!(is_eliminated(&s, name).unwrap(), is_eliminated(&s, name).unwrap());
        let mut a = certificate(&s, name).unwrap_or_default();
        let mut b = certificate(&s, name).unwrap_or_default();
        a.sort();
        b.sort();
        assert_eq!(a, b);
    }
}

#[test]
fn report_lists_every_team_in_order() {
    let report = division_report(&teams4()).unwrap();
    let lines: Vec<String> = report.iter().map(TeamStatus::to_string).collect();
    assert_eq!(
        lines,
        [
            "Atlanta is not eliminated",
            "Philadelphia is eliminated by the subset R = { Atlanta New_York }",
            "New_York is not eliminated",
            "Montreal is eliminated by the subset R = { Atlanta Philadelphia New_York }",
        ]
    );
    assert!(report.iter().all(|st| st.eliminated == st.certificate.is_some()));
}

#[test]
fn status_serializes_to_json() {
    let status = analyze(&teams4(), "Philadelphia").unwrap();
    let json = serde_json::to_value(&status).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "team": "Philadelphia",
            "eliminated": true,
            "certificate": ["Atlanta", "New_York"],
        })
    );
    let status = analyze(&teams4(), "Atlanta").unwrap();
    assert_eq!(
        serde_json::to_value(&status).unwrap(),
        serde_json::json!({ "team": "Atlanta", "eliminated": false, "certificate": null })
    );
}

#[test]
fn agrees_with_brute_force_on_random_divisions() {
    let mut rng = StdRng::seed_from_u64(2024);
    let mut eliminated = 0;
    for _ in 0..400 {
        let s = random_division(&mut rng);
        for target in 0..s.team_count() {
            let name = s.team_at(target).name.clone();
            let expected = brute_force_eliminated(&s, target);
            assert_eq!(is_eliminated(&s, &name).unwrap(), expected, "{:?} / {}", s.teams(), name);

            let cert = certificate(&s, &name);
            assert_eq!(cert.is_some(), expected, "{:?} / {}", s.teams(), name);
            if let Some(cert) = cert {
                eliminated += 1;
                assert!(!cert.is_empty());
                assert!(!cert.contains(&name));
                let members: Vec<usize> = cert.iter().map(|t| s.index_of(t).unwrap()).collect();
                assert!(
                    subset_eliminates(&s, &members, s.team_at(target).max_wins()),
                    "certificate {:?} does not eliminate {}",
                    cert,
                    name
                );
            }
        }
    }
    assert!(eliminated > 0);
}

#[test]
fn certificate_alone_still_eliminates() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let s = random_division(&mut rng);
        for target in 0..s.team_count() {
            let name = s.team_at(target).name.clone();
            let Some(cert) = certificate(&s, &name) else {
                continue;
            };
            let mut keep: Vec<usize> = cert.iter().map(|t| s.index_of(t).unwrap()).collect();
            keep.push(target);
            keep.sort_unstable();
            let reduced = restrict(&s, &keep);
            assert!(is_eliminated(&reduced, &name).unwrap());
        }
    }
}

#[test]
fn parallel_queries_match_sequential_ones() {
    let s = teams5();
    let sequential = division_report(&s).unwrap();
    let names: Vec<&str> = s.team_names().collect();
    let parallel: Vec<TeamStatus> = std::thread::scope(|scope| {
        let handles: Vec<_> = names
            .iter()
            .map(|&name| {
                let s = &s;
                scope.spawn(move || analyze(s, name).unwrap())
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert_eq!(parallel, sequential);
}
