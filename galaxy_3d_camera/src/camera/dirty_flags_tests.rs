use super::*;

#[test]
fn test_default_is_all_dirty() {
    let flags = DirtyFlags::default();
    assert!(flags.contains(DirtyFlags::WORLD));
    assert!(flags.contains(DirtyFlags::VIEW));
    assert!(flags.contains(DirtyFlags::PROJECTION));
    assert!(flags.contains(DirtyFlags::COMBINED));
}

#[test]
fn test_transform_is_world_or_view() {
    assert_eq!(DirtyFlags::TRANSFORM, DirtyFlags::WORLD | DirtyFlags::VIEW);
    assert!(!DirtyFlags::TRANSFORM.intersects(DirtyFlags::PROJECTION));
}

#[test]
fn test_bits_are_independent() {
    let mut flags = DirtyFlags::all();
    flags.remove(DirtyFlags::WORLD);

    assert!(!flags.contains(DirtyFlags::WORLD));
    assert!(flags.contains(DirtyFlags::VIEW));
    assert!(flags.contains(DirtyFlags::PROJECTION));

    flags.remove(DirtyFlags::VIEW | DirtyFlags::PROJECTION | DirtyFlags::COMBINED);
    assert!(flags.is_empty());

    flags |= DirtyFlags::PROJECTION;
    assert_eq!(flags, DirtyFlags::PROJECTION);
}
