use crate::Tag;


mod endian;

macro_rules! check_tags {
    {$($tag:ident = $val:literal),* $(,)?} => {
        $(
            assert_eq!(u8::from(Tag::$tag), $val);
            assert_eq!(Tag::try_from($val as u8), Ok(Tag::$tag));
        )*
    };
}

#[test]
fn exhaustive_tag_check() {
    check_tags! {
        End = 0,
        Byte = 1,
        Short = 2,
        Int = 3,
        Long = 4,
        Float = 5,
        Double = 6,
        ByteArray = 7,
        String = 8,
        List = 9,
        Compound = 10,
        IntArray = 11,
        LongArray = 12,
    }

    for value in 13..=u8::MAX {
        assert!(Tag::try_from(value).is_err())
    }
}

#[test]
fn tag_widths() {
    assert_eq!(Tag::Byte.width(), Some(1));
    assert_eq!(Tag::Short.width(), Some(2));
    assert_eq!(Tag::Int.width(), Some(4));
    assert_eq!(Tag::Long.width(), Some(8));
    assert_eq!(Tag::Float.width(), Some(4));
    assert_eq!(Tag::Double.width(), Some(8));
    assert_eq!(Tag::ByteArray.width(), Some(1));
    assert_eq!(Tag::IntArray.width(), Some(4));
    assert_eq!(Tag::LongArray.width(), Some(8));
    assert_eq!(Tag::End.width(), None);
    assert_eq!(Tag::String.width(), None);
    assert_eq!(Tag::List.width(), None);
    assert_eq!(Tag::Compound.width(), None);
}
