use tictactoe::{BitBoard, BitBoardError};

type BB = BitBoard<u16, 3>;

#[test]
fn test_get_set() {
    let mut bb = BB::new();
    assert_eq!(bb.count_ones(), 0);

    bb.set(4).unwrap();
    assert!(bb.get(4).unwrap());
    assert!(!bb.get(3).unwrap());
    assert_eq!(bb.count_ones(), 1);

    assert_eq!(bb.set(9).unwrap_err(), BitBoardError::IndexOutOfBounds { index: 9 });
    assert_eq!(bb.get(9).unwrap_err(), BitBoardError::IndexOutOfBounds { index: 9 });
}

#[test]
fn test_full_and_not_stay_within_grid() {
    let full = BB::full();
    assert_eq!(full.count_ones(), 9);
    assert_eq!((!full).count_ones(), 0);
    assert_eq!(!BB::new(), full);
}

#[test]
fn test_from_fn_and_iter() {
    let diag = BB::from_fn(|i| i % 4 == 0);
    assert_eq!(diag.iter_set_bits().collect::<Vec<_>>(), vec![0, 4, 8]);

    let corner = BB::from_fn(|i| i == 0);
    assert!(diag.contains(corner));
    assert!(!corner.contains(diag));
    assert_eq!((diag | BB::from_fn(|i| i == 1)).count_ones(), 4);
}
