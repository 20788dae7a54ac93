use std::fs;
use std::path::PathBuf;

use proptest::prelude::*;
use rawprune::clean::{self, CleanMode};

const BASES: [&str; 4] = ["dsc0001", "img_7", "photo", "x"];
const JPEG_EXTS: [&str; 3] = ["jpg", "JPG", "jpeg"];
const RAW_EXTS: [&str; 3] = ["arw", "ARW", "dng"];

#[derive(Debug, Clone)]
struct Slot {
    jpeg: Option<usize>,
    raw: Option<usize>,
    upper_jpeg_name: bool,
}

fn slot() -> impl Strategy<Value = Slot> {
    (
        proptest::option::of(0..JPEG_EXTS.len()),
        proptest::option::of(0..RAW_EXTS.len()),
        any::<bool>(),
    )
        .prop_map(|(jpeg, raw, upper_jpeg_name)| Slot { jpeg, raw, upper_jpeg_name })
}

// each inner vec is one directory, nested inside the previous one
fn layout() -> impl Strategy<Value = Vec<Vec<Slot>>> {
    proptest::collection::vec(proptest::collection::vec(slot(), BASES.len()), 1..4)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn jpeg_goes_iff_raw_twin_in_same_directory(layout in layout()) {
        let temp = tempfile::tempdir().unwrap();
        let mut dir = temp.path().to_path_buf();
        let mut expected_gone: Vec<PathBuf> = Vec::new();
        let mut expected_kept: Vec<PathBuf> = Vec::new();
        let mut expected_bytes = 0u64;

        for (depth, slots) in layout.iter().enumerate() {
            if depth > 0 {
                dir = dir.join(format!("level{depth}"));
            }
            fs::create_dir_all(&dir).unwrap();

            for (i, slot) in slots.iter().enumerate() {
                let base = BASES[i];

                if let Some(ext) = slot.raw {
                    fs::write(dir.join(format!("{base}.{}", RAW_EXTS[ext])), b"raw").unwrap();
                }

                if let Some(ext) = slot.jpeg {
                    let name = if slot.upper_jpeg_name { base.to_uppercase() } else { base.to_string() };
                    let path = dir.join(format!("{name}.{}", JPEG_EXTS[ext]));
                    let len = depth * 10 + i + 1;
                    fs::write(&path, vec![1u8; len]).unwrap();

                    if slot.raw.is_some() {
                        expected_bytes += len as u64;
                        expected_gone.push(path);
                    } else {
                        expected_kept.push(path);
                    }
                }
            }
        }

        let dry = clean::run(temp.path(), CleanMode::DryRun).unwrap();
        prop_assert_eq!(dry.files_deleted, expected_gone.len() as u64);
        prop_assert_eq!(dry.bytes_freed, expected_bytes);
        for path in &expected_gone {
            prop_assert!(path.exists());
        }

        let real = clean::run(temp.path(), CleanMode::Execute).unwrap();
        prop_assert_eq!(real, dry);
        for path in &expected_gone {
            prop_assert!(!path.exists());
        }
        for path in &expected_kept {
            prop_assert!(path.exists());
        }
    }
}
