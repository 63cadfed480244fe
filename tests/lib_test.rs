//! Library integration tests.

use std::collections::BTreeSet;

use rtpkit::detection::{detect, MemoryTree, RtpDetector};
use rtpkit::registry::{builtin, Generation, RtpType, VersionFilter};
use rtpkit::table::IdentityTable;
use rtpkit::translate::{is_rtp_asset, lookup_any_to_rtp, lookup_rtp_to_rtp};
use rtpkit::RtpError;

#[test]
fn error_types_are_public() {
    let err = RtpError::UnknownVariant {
        name: "rpg2001".into(),
    };
    assert!(err.to_string().contains("rpg2001"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> rtpkit::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use rtpkit::cli::{Cli, Commands};

    let cli = Cli::parse_from(["rtpkit", "variants", "--json"]);
    if let Commands::Variants(args) = cli.command {
        assert!(args.json);
    } else {
        panic!("Expected Variants command");
    }
}

#[test]
fn registry_has_ten_variants_split_by_generation() {
    assert_eq!(RtpType::ALL.len(), 10);
    assert_eq!(RtpType::of_generation(Generation::Rpg2000).count(), 4);
    assert_eq!(RtpType::of_generation(Generation::Rpg2003).count(), 6);
    assert_eq!(VersionFilter::Any.variants().count(), 10);
}

fn tree_of(rtp: RtpType) -> MemoryTree {
    let mut tree = MemoryTree::new();
    for probe in builtin::table().probes(rtp) {
        tree.add_file(probe.category, &format!("{}.png", probe.name));
    }
    tree
}

#[test]
fn complete_tree_scores_full_marks() {
    for rtp in RtpType::ALL {
        let hits = detect(&tree_of(rtp), rtp.generation().into());
        let own = hits.iter().find(|hit| hit.rtp == rtp).unwrap();
        assert!(own.max > 0, "{rtp} has no probes");
        assert_eq!(own.hits, own.max, "{rtp} not fully detected");
    }
}

#[test]
fn empty_tree_scores_nothing() {
    let hits = detect(&MemoryTree::new(), VersionFilter::Any);
    assert_eq!(hits.len(), 10);
    assert!(hits.iter().all(|hit| hit.hits == 0));
}

#[test]
fn detection_respects_registry_order_and_filter() {
    let hits = detect(&MemoryTree::new(), Generation::Rpg2003.into());
    let order: Vec<RtpType> = hits.iter().map(|hit| hit.rtp).collect();
    let expected: Vec<RtpType> = RtpType::of_generation(Generation::Rpg2003).collect();
    assert_eq!(order, expected);
}

#[test]
fn identity_translation_returns_input() {
    for rtp in RtpType::ALL {
        assert_eq!(lookup_rtp_to_rtp("Music", "anything", rtp, rtp), "anything");
    }
}

#[test]
fn translation_round_trips_through_every_pair() {
    let table = builtin::table();
    for category in table.categories() {
        for row in table.rows(category) {
            for (src, src_name) in row.names() {
                for (target, target_name) in row.names() {
                    let there = table.lookup_rtp_to_rtp(category, src_name, src, target);
                    assert_eq!(there, target_name);
                    let back = table.lookup_rtp_to_rtp(category, &there, target, src);
                    assert_eq!(back, src_name);
                }
            }
        }
    }
}

#[test]
fn missing_counterpart_is_empty() {
    // Addon-only assets have no official Japanese name.
    let table = builtin::table();
    let addon_only = table
        .rows("Music")
        .iter()
        .filter(|row| row.name_for(RtpType::Rpg2000OfficialJapanese).is_none())
        .find_map(|row| row.name_for(RtpType::Rpg2000DonMiguelAddon))
        .unwrap();

    assert_eq!(
        lookup_rtp_to_rtp(
            "Music",
            addon_only,
            RtpType::Rpg2000DonMiguelAddon,
            RtpType::Rpg2000OfficialJapanese
        ),
        ""
    );
}

#[test]
fn reverse_lookup_reports_every_owner() {
    let owners = lookup_any_to_rtp("Music", "Battle1", VersionFilter::Any);
    let expected: BTreeSet<RtpType> = [
        RtpType::Rpg2000OfficialEnglish,
        RtpType::Rpg2003OfficialEnglish,
        RtpType::Rpg2003RpgAdvocateEnglish,
    ]
    .into_iter()
    .collect();
    assert_eq!(owners, expected);

    let only_2000 = lookup_any_to_rtp("Music", "Battle1", Generation::Rpg2000.into());
    assert_eq!(
        only_2000.into_iter().collect::<Vec<_>>(),
        vec![RtpType::Rpg2000OfficialEnglish]
    );
}

#[test]
fn reverse_lookup_agrees_with_membership() {
    for rtp in lookup_any_to_rtp("CharSet", "Hero1", VersionFilter::Any) {
        assert!(is_rtp_asset(rtp, "CharSet", "Hero1"));
    }
    assert!(lookup_any_to_rtp("Music", "NotAnAsset", VersionFilter::Any).is_empty());
    assert!(lookup_any_to_rtp("NoSuchCategory", "Battle1", VersionFilter::Any).is_empty());
}

#[test]
fn english_battle_theme_maps_to_don_miguel_name() {
    let table = IdentityTable::from_yaml(
        "scenario.yml",
        r#"
generation: 2000
variants: [rpg2000_official_english, rpg2000_don_miguel_english]
categories:
  Music:
    - ["Battle1", "Battle1_DM"]
"#,
    )
    .unwrap();

    assert_eq!(
        table.lookup_rtp_to_rtp(
            "Music",
            "Battle1",
            RtpType::Rpg2000OfficialEnglish,
            RtpType::Rpg2000DonMiguelEnglish
        ),
        "Battle1_DM"
    );
    assert_eq!(
        table
            .lookup_any_to_rtp("Music", "Battle1_DM", VersionFilter::Any)
            .into_iter()
            .collect::<Vec<_>>(),
        vec![RtpType::Rpg2000DonMiguelEnglish]
    );
}

#[test]
fn partial_english_install_outscores_japanese() {
    let mut yaml = String::from(
        "generation: 2000\nvariants: [rpg2000_official_japanese, rpg2000_official_english]\ncategories:\n  Music:\n",
    );
    for i in 0..10 {
        yaml.push_str(&format!("    - [\"曲{i}\", \"Song{i}\"]\n"));
    }
    for i in 10..12 {
        yaml.push_str(&format!("    - [\"曲{i}\", ~]\n"));
    }
    let table = IdentityTable::from_yaml("scenario.yml", &yaml).unwrap();

    let mut tree = MemoryTree::new();
    for i in 0..7 {
        tree.add_file("Music", &format!("Song{i}.mid"));
    }

    let hits = RtpDetector::new(&table).detect(&tree, Generation::Rpg2000.into());
    let japanese = &hits[0];
    let english = &hits[1];
    assert_eq!((japanese.hits, japanese.max), (0, 12));
    assert_eq!((english.hits, english.max), (7, 10));
    assert!(english.ratio() > japanese.ratio());
}
