use std::path::Path;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use fnd_core::{DatasetRecord, Label, Result};

/// Fixed shuffle seed so the fallback dataset is byte-identical across runs.
pub const SHUFFLE_SEED: u64 = 42;

/// Each template sentence appears this many times in the generated dataset.
pub const REPLICATION: usize = 25;

pub const REAL_TEMPLATES: [&str; 10] = [
    "Scientists at MIT developed new carbon capture technology.",
    "Federal Reserve announces interest rate decision.",
    "Study shows exercise reduces heart disease risk.",
    "UN climate summit reaches emission agreements.",
    "Solar panel efficiency improves by 15 percent.",
    "WHO reports decline in malaria cases globally.",
    "NASA telescope captures images of distant galaxies.",
    "Economic growth forecast at 2.5 percent.",
    "Vaccination rates increase in developing nations.",
    "College graduation rates rise by 5 percent.",
];

pub const FAKE_TEMPLATES: [&str; 10] = [
    "SHOCKING: Coffee makes you immortal, doctors hide this!",
    "Celebrity reveals vaccine truth they don't want you to know!",
    "BREAKING: Aliens built pyramids, government documents prove it!",
    "Miracle cure eliminates all diseases overnight!",
    "EXPOSED: Smartphone reads your mind!",
    "Man loses 100 pounds in one week eating ice cream!",
    "Scientists confirm Earth is flat, NASA lied!",
    "Billionaire's secret to getting rich overnight!",
    "Tap water contains mind control chemicals!",
    "Doctors discover sleeping secret, pillow industry panics!",
];

/// Build the balanced fallback dataset: every real template, then every fake
/// template, each replicated, then shuffled with the fixed seed.
pub fn generate() -> Vec<DatasetRecord> {
    let mut records = Vec::with_capacity(REAL_TEMPLATES.len() * REPLICATION * 2);
    for _ in 0..REPLICATION {
        for text in REAL_TEMPLATES {
            records.push(DatasetRecord {
                text: text.to_string(),
                label: Label::Real,
            });
        }
    }
    for _ in 0..REPLICATION {
        for text in FAKE_TEMPLATES {
            records.push(DatasetRecord {
                text: text.to_string(),
                label: Label::Fake,
            });
        }
    }

    let mut rng = StdRng::seed_from_u64(SHUFFLE_SEED);
    records.shuffle(&mut rng);
    records
}

/// Serialize records to CSV with a `text,label` header.
pub fn to_csv_bytes(records: &[DatasetRecord]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for record in records {
        writer.serialize(record)?;
    }
    writer
        .into_inner()
        .map_err(|e| fnd_core::Error::Provisioning(format!("CSV flush failed: {}", e)))
}

pub fn write_csv(path: &Path, records: &[DatasetRecord]) -> Result<()> {
    let bytes = to_csv_bytes(records)?;
    std::fs::write(path, bytes)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_dataset_is_balanced() {
        let records = generate();
        assert_eq!(records.len(), 500);

        let fake = records.iter().filter(|r| r.label == Label::Fake).count();
        let real = records.iter().filter(|r| r.label == Label::Real).count();
        assert_eq!(fake, 250);
        assert_eq!(real, 250);
    }

    #[test]
    fn test_generated_dataset_is_deterministic() {
        assert_eq!(generate(), generate());
        assert_eq!(
            to_csv_bytes(&generate()).unwrap(),
            to_csv_bytes(&generate()).unwrap()
        );
    }

    #[test]
    fn test_every_template_survives_the_shuffle() {
        let records = generate();
        for template in REAL_TEMPLATES.iter().chain(FAKE_TEMPLATES.iter()) {
            let count = records.iter().filter(|r| r.text == *template).count();
            assert_eq!(count, REPLICATION, "missing replicas of {:?}", template);
        }
    }

    #[test]
    fn test_csv_has_header_and_numeric_labels() {
        let bytes = to_csv_bytes(&generate()).unwrap();
        let out = String::from_utf8(bytes).unwrap();
        let mut lines = out.lines();
        assert_eq!(lines.next(), Some("text,label"));
        for line in lines {
            assert!(line.ends_with(",0") || line.ends_with(",1"), "bad row: {}", line);
        }
    }
}
