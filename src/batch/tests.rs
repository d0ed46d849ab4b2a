use super::*;
use crate::error::BatchError;

fn make_inputs(names: &[&str]) -> Vec<InputItem> {
    names
        .iter()
        .map(|name| InputItem::new(format!("/data/{}", name)).unwrap())
        .collect()
}

fn cap(n: i64) -> Capacity {
    Capacity::bounded(n).unwrap()
}

fn names(batch: &Batch) -> Vec<String> {
    batch
        .items()
        .iter()
        .map(|item| item.path().file_name().unwrap().to_string_lossy().to_string())
        .collect()
}

#[test]
fn test_plan_short_final_batch() {
    let inputs = make_inputs(&["a.fq", "b.fq", "c.fq", "d.fq", "e.fq"]);
    let batches = plan(&inputs, cap(2));

    assert_eq!(batches.len(), 3);
    assert_eq!(names(&batches[0]), vec!["a.fq", "b.fq"]);
    assert_eq!(names(&batches[1]), vec!["c.fq", "d.fq"]);
    assert_eq!(names(&batches[2]), vec!["e.fq"]);
}

#[test]
fn test_plan_exact_multiple() {
    let inputs = make_inputs(&["a.fq", "b.fq", "c.fq", "d.fq"]);
    let batches = plan(&inputs, cap(2));

    // No trailing short batch when the count divides evenly
    assert_eq!(batches.len(), 2);
    assert_eq!(names(&batches[0]), vec!["a.fq", "b.fq"]);
    assert_eq!(names(&batches[1]), vec!["c.fq", "d.fq"]);
}

#[test]
fn test_plan_empty() {
    let inputs: Vec<InputItem> = vec![];
    assert!(plan(&inputs, cap(4)).is_empty());
    assert!(plan(&inputs, Capacity::Unbounded).is_empty());
}

#[test]
fn test_plan_unbounded_single_batch() {
    let inputs = make_inputs(&["a.fq", "b.fq", "c.fq"]);
    let batches = plan(&inputs, Capacity::Unbounded);

    assert_eq!(batches.len(), 1);
    assert_eq!(batches[0].len(), 3);
}

#[test]
fn test_plan_capacity_larger_than_inputs() {
    let inputs = make_inputs(&["a.fq", "b.fq"]);
    let batches = plan(&inputs, cap(16));

    assert_eq!(batches.len(), 1);
    assert_eq!(names(&batches[0]), vec!["a.fq", "b.fq"]);
}

#[test]
fn test_plan_counts_and_concatenation() {
    for len in 0..25usize {
        let inputs: Vec<InputItem> = (0..len)
            .map(|i| InputItem::new(format!("/data/s{}.fq", i)).unwrap())
            .collect();

        for capacity in 1..8usize {
            let batches = plan(&inputs, cap(capacity as i64));

            assert_eq!(batches.len(), len.div_ceil(capacity));
            for (i, batch) in batches.iter().enumerate() {
                assert!(!batch.is_empty());
                if i + 1 < batches.len() {
                    assert_eq!(batch.len(), capacity);
                } else {
                    let rem = len % capacity;
                    assert_eq!(batch.len(), if rem == 0 { capacity } else { rem });
                }
            }

            let rejoined: Vec<InputItem> = batches
                .iter()
                .flat_map(|b| b.items().iter().cloned())
                .collect();
            assert_eq!(rejoined, inputs, "batches must reproduce the input");
        }
    }
}

#[test]
fn test_capacity_rejects_zero_and_negative() {
    assert_eq!(Capacity::bounded(0), Err(BatchError::InvalidCapacity(0)));
    assert_eq!(Capacity::bounded(-3), Err(BatchError::InvalidCapacity(-3)));
    assert_eq!(cap(3).limit(), Some(3));
}

#[test]
fn test_capacity_from_threads() {
    assert_eq!(Capacity::from_threads(4, false).unwrap().limit(), Some(4));
    assert_eq!(Capacity::from_threads(4, true).unwrap(), Capacity::Unbounded);

    // Thread count is still validated in single-batch mode
    assert!(Capacity::from_threads(0, true).is_err());
}

#[test]
fn test_input_item_requires_absolute_path() {
    let result = InputItem::new("relative/a.fq");
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("not absolute"));

    let item = InputItem::new("/data/a.fq").unwrap();
    assert_eq!(item.to_string(), "/data/a.fq");
    assert_eq!(item.as_str(), "/data/a.fq");
}

#[cfg(unix)]
#[test]
fn test_input_item_rejects_non_utf8_path() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;
    use std::path::PathBuf;

    let path = PathBuf::from(OsStr::from_bytes(b"/data/s\xff.fq"));
    let result = InputItem::new(path.clone());

    assert_eq!(result, Err(BatchError::NonUtf8Path(path)));
}
