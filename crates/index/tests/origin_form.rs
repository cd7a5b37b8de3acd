//! Integration tests for origin-form addressing.

use leafpack_index::{
    IndexError, Origin, PackedLayout, Pair, origin_col, origin_offset, origin_row, packed_len,
};

/// Four items: every pair, the buffer size, and both inverse lookups.
#[test]
fn four_item_table() {
    let layout = PackedLayout::<Origin>::new(4).unwrap();
    assert_eq!(layout.len(), 6);
    assert_eq!(packed_len(4), 6);

    let table = [(1, 0, 0), (2, 0, 1), (2, 1, 2), (3, 0, 3), (3, 1, 4), (3, 2, 5)];
    for (i, j, k) in table {
        assert_eq!(origin_offset(i, j), k);
        assert_eq!(layout.offset(i, j).unwrap(), k);
        assert_eq!(layout.offset(j, i).unwrap(), k);
    }

    assert_eq!(origin_row(4), 3);
    assert_eq!(origin_col(3, 4), 1);
}

/// Every offset in `[0, n(n-1)/2)` is hit exactly once.
#[test]
fn bijective_for_each_n() {
    for n in 1..64 {
        let len = packed_len(n);
        let mut seen = vec![false; len];
        for i in 0..n {
            for j in (i + 1)..n {
                let k = origin_offset(i, j);
                assert!(k < len, "n = {n}: ({i}, {j}) -> {k} outside {len}");
                assert!(!seen[k], "n = {n}: collision at {k}");
                seen[k] = true;
            }
        }
        assert!(seen.iter().all(|&s| s), "n = {n}: gap in offsets");
    }
}

/// Growing `n` appends cells without moving existing ones.
#[test]
fn smaller_matrix_is_prefix() {
    let small = PackedLayout::<Origin>::new(5).unwrap();
    let large = PackedLayout::<Origin>::new(9).unwrap();
    for (k, p) in small.pairs() {
        assert_eq!(large.offset(p.lo, p.hi).unwrap(), k);
    }
}

/// Offsets on triangular numbers start a new row.
#[test]
fn triangular_boundaries() {
    let mut start = 0usize;
    for row in 1..500usize {
        assert_eq!(origin_row(start), row, "row start {start}");
        assert_eq!(origin_col(row, start), 0);
        let last = start + row - 1;
        assert_eq!(origin_row(last), row, "row end {last}");
        assert_eq!(origin_col(row, last), row - 1);
        start += row;
    }
}

#[test]
fn layout_rejects_out_of_contract() {
    let layout = PackedLayout::<Origin>::new(4).unwrap();
    assert_eq!(
        layout.offset(1, 1),
        Err(IndexError::InvalidCoordinate { i: 1, j: 1, n: 4 })
    );
    assert_eq!(
        layout.offset(4, 1),
        Err(IndexError::InvalidCoordinate { i: 4, j: 1, n: 4 })
    );
    assert_eq!(
        layout.pair(10),
        Err(IndexError::OutOfRangeIndex { offset: 10, len: 6 })
    );
    assert_eq!(layout.pair(0), Ok(Pair { lo: 0, hi: 1 }));
}
