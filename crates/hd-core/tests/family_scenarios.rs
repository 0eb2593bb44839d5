//! End-to-end inference on small family pedigrees.
//!
//! Validates:
//! - Posteriors of the reference families to four decimals
//! - Observed traits pin the trait posterior
//! - Founders without evidence keep the prior, alone or with a child
//! - Zero mutation rate with fixed founders forces the children's counts
//! - Evidence the model cannot explain is reported, not NaN

use hd_common::{Error, GeneCount};
use hd_config::{GenePrior, ModelParams, Penetrance, PenetranceTable};
use hd_core::inference::{infer, PedigreePosterior};
use hd_core::pedigree::{read_csv, Pedigree, PersonRecord, TraitEvidence};

// ============================================================================
// Helpers
// ============================================================================

const FAMILY0: &str = "\
name,mother,father,trait
Harry,Lily,James,
James,,,1
Lily,,,0
";

const FAMILY1: &str = "\
name,mother,father,trait
Arthur,,,0
Charlie,Molly,Arthur,0
Fred,Molly,Arthur,1
Ginny,Molly,Arthur,
Molly,,,
Ron,Molly,Arthur,
";

fn pedigree(csv: &str) -> Pedigree {
    Pedigree::from_records(read_csv(csv.as_bytes()).expect("parse CSV")).expect("valid pedigree")
}

fn assert_close(actual: f64, expected: f64, what: &str) {
    assert!(
        (actual - expected).abs() < 1e-4,
        "{what}: expected {expected:.4}, got {actual:.6}"
    );
}

/// `[two, one, zero]` gene and `present` trait, as printed in reports.
fn check(post: &PedigreePosterior, name: &str, gene: [f64; 3], present: f64) {
    let p = post.get(name).unwrap_or_else(|| panic!("{name} missing"));
    assert_close(p.gene.two, gene[0], &format!("{name} gene 2"));
    assert_close(p.gene.one, gene[1], &format!("{name} gene 1"));
    assert_close(p.gene.zero, gene[2], &format!("{name} gene 0"));
    assert_close(p.trait_.present, present, &format!("{name} trait"));
}

fn assert_normalized(post: &PedigreePosterior) {
    for p in post {
        let g: f64 = p.gene.as_array().iter().sum();
        let t = p.trait_.present + p.trait_.absent;
        assert!((g - 1.0).abs() < 1e-9, "{} gene sums to {g}", p.id);
        assert!((t - 1.0).abs() < 1e-9, "{} trait sums to {t}", p.id);
    }
}

// ============================================================================
// Reference families
// ============================================================================

#[test]
fn family0_posteriors() {
    let post = infer(&pedigree(FAMILY0), &ModelParams::default()).unwrap();
    assert_eq!(post.len(), 3);
    check(&post, "Harry", [0.0092, 0.4557, 0.5351], 0.2665);
    check(&post, "James", [0.1976, 0.5106, 0.2918], 1.0);
    check(&post, "Lily", [0.0036, 0.0136, 0.9827], 0.0);
    assert_normalized(&post);
}

#[test]
fn family1_posteriors() {
    let post = infer(&pedigree(FAMILY1), &ModelParams::default()).unwrap();
    check(&post, "Arthur", [0.0283, 0.0895, 0.8823], 0.0);
    check(&post, "Charlie", [0.0031, 0.1944, 0.8025], 0.0);
    check(&post, "Fred", [0.0087, 0.6996, 0.2918], 1.0);
    check(&post, "Ginny", [0.0045, 0.2552, 0.7403], 0.1532);
    check(&post, "Molly", [0.0782, 0.1958, 0.7260], 0.1677);
    check(&post, "Ron", [0.0045, 0.2552, 0.7403], 0.1532);
    assert_normalized(&post);
}

#[test]
fn siblings_with_identical_evidence_share_posteriors() {
    let post = infer(&pedigree(FAMILY1), &ModelParams::default()).unwrap();
    let ginny = post.get("Ginny").unwrap();
    let ron = post.get("Ron").unwrap();
    for count in GeneCount::ALL {
        assert!((ginny.gene.get(count) - ron.gene.get(count)).abs() < 1e-12);
    }
    assert!((ginny.trait_.present - ron.trait_.present).abs() < 1e-12);
}

#[test]
fn report_order_follows_input_rows() {
    let post = infer(&pedigree(FAMILY1), &ModelParams::default()).unwrap();
    let names: Vec<&str> = post.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(names, ["Arthur", "Charlie", "Fred", "Ginny", "Molly", "Ron"]);
}

// ============================================================================
// Single people
// ============================================================================

#[test]
fn unobserved_founder_keeps_prior() {
    let model = ModelParams::default();
    let ped = Pedigree::from_records(vec![PersonRecord::new("Solo")]).unwrap();
    let post = infer(&ped, &model).unwrap();
    let solo = post.get("Solo").unwrap();
    for count in GeneCount::ALL {
        assert!((solo.gene.get(count) - model.gene_prior(count)).abs() < 1e-12);
    }
    // 0.96*0.01 + 0.03*0.56 + 0.01*0.65
    assert!((solo.trait_.present - 0.0329).abs() < 1e-12);
}

#[test]
fn observed_trait_shifts_mass_toward_copies() {
    let model = ModelParams::default();
    let present = Pedigree::from_records(vec![
        PersonRecord::new("A").with_evidence(TraitEvidence::Present)
    ])
    .unwrap();
    let absent = Pedigree::from_records(vec![
        PersonRecord::new("A").with_evidence(TraitEvidence::Absent)
    ])
    .unwrap();

    let with_trait = infer(&present, &model).unwrap();
    let without = infer(&absent, &model).unwrap();
    let a = with_trait.get("A").unwrap();
    let b = without.get("A").unwrap();

    assert_eq!(a.trait_.present, 1.0);
    assert_eq!(b.trait_.absent, 1.0);
    assert!(a.gene.two > model.gene_prior(GeneCount::Two));
    assert!(a.gene.zero < model.gene_prior(GeneCount::Zero));
    assert!(b.gene.zero > model.gene_prior(GeneCount::Zero));
    check(&with_trait, "A", [0.1976, 0.5106, 0.2918], 1.0);
}

// ============================================================================
// Mutation and determinism
// ============================================================================

fn trio() -> Pedigree {
    Pedigree::from_records(vec![
        PersonRecord::new("Child").with_parents("Mom", "Dad"),
        PersonRecord::new("Mom"),
        PersonRecord::new("Dad"),
    ])
    .unwrap()
}

#[test]
fn unobserved_trio_founders_keep_prior_and_child_inherits() {
    let model = ModelParams::default();
    let post = infer(&trio(), &model).unwrap();

    for parent in ["Mom", "Dad"] {
        let p = post.get(parent).unwrap();
        for count in GeneCount::ALL {
            assert!(
                (p.gene.get(count) - model.gene_prior(count)).abs() < 1e-12,
                "{parent} gene {count}"
            );
        }
    }

    // Each parent transmits with 0.96*0.01 + 0.03*0.5 + 0.01*0.99 = 0.0345.
    let child = post.get("Child").unwrap();
    assert!((child.gene.two - 0.0345 * 0.0345).abs() < 1e-12);
    assert!((child.gene.one - 2.0 * 0.0345 * 0.9655).abs() < 1e-12);
    assert!((child.gene.zero - 0.9655 * 0.9655).abs() < 1e-12);
    assert_ne!(child.gene.as_array(), model.gene_prior.as_array());
    assert_normalized(&post);
}

#[test]
fn no_mutation_and_no_carriers_means_no_copies() {
    let mut model = ModelParams::default().with_mutation_rate(0.0);
    model.gene_prior = GenePrior::new(1.0, 0.0, 0.0);
    let post = infer(&trio(), &model).unwrap();
    for p in &post {
        assert_eq!(p.gene.zero, 1.0, "{}", p.id);
    }
}

#[test]
fn no_mutation_and_homozygous_parents_means_two_copies() {
    let mut model = ModelParams::default().with_mutation_rate(0.0);
    model.gene_prior = GenePrior::new(0.0, 0.0, 1.0);
    let post = infer(&trio(), &model).unwrap();
    let child = post.get("Child").unwrap();
    assert_eq!(child.gene.two, 1.0);
    assert_eq!(child.gene.one, 0.0);
    assert!((child.trait_.present - 0.65).abs() < 1e-12);
}

#[test]
fn repeated_runs_are_identical() {
    let ped = pedigree(FAMILY1);
    let model = ModelParams::default();
    assert_eq!(infer(&ped, &model).unwrap(), infer(&ped, &model).unwrap());
}

// ============================================================================
// Degenerate evidence
// ============================================================================

#[test]
fn impossible_evidence_is_reported() {
    let mut model = ModelParams::default();
    model.penetrance = PenetranceTable {
        zero: Penetrance::with_present(0.0),
        one: Penetrance::with_present(0.0),
        two: Penetrance::with_present(0.0),
    };
    let ped = Pedigree::from_records(vec![
        PersonRecord::new("A").with_evidence(TraitEvidence::Present)
    ])
    .unwrap();

    let err = infer(&ped, &model).unwrap_err();
    assert!(
        matches!(err, Error::DegenerateEvidence { ref person, .. } if person == "A"),
        "{err}"
    );
}
