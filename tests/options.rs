//! Tests for the option vocabularies
//!
//! These tests exercise the public option API the way the parser,
//! serializer, iterator and template engines use it.

mod contract {
    use pretty_assertions::assert_eq;
    use test_log::test;
    use xmpkit_options::{
        AliasFlags, AliasOptions, IteratorOptions, OptionSet, ParseFlags, ParseOptions,
        SerializeOptions, TemplateFlags, TemplateOptions, XmpError,
    };

    fn assert_round_trip<T: OptionSet>() {
        // Every subset of the valid mask reads back unchanged unless the
        // consistency check rejects it
        let valid = T::valid_mask();
        let mut subset: u32 = 0;
        loop {
            match T::from_raw(subset) {
                Ok(options) => assert_eq!(options.raw(), subset),
                Err(err) => assert!(matches!(err, XmpError::BadOptions(_))),
            }
            subset = subset.wrapping_sub(valid) & valid;
            if subset == 0 {
                break;
            }
        }
    }

    #[test]
    fn valid_masks_round_trip() {
        assert_round_trip::<ParseOptions>();
        assert_round_trip::<SerializeOptions>();
        assert_round_trip::<IteratorOptions>();
        assert_round_trip::<TemplateOptions>();
    }

    #[test]
    fn invalid_bits_are_reported_exactly() {
        let err = ParseOptions::from_raw(0x0008 | 0x0100 | 0x8000_0000).unwrap_err();
        assert_eq!(err, XmpError::InvalidOptionBits(0x8000_0100));
        assert_eq!(
            err.to_string(),
            "Bad options: the option bit(s) 0x80000100 are invalid"
        );

        let err = IteratorOptions::from_raw(0x0001).unwrap_err();
        assert_eq!(err.invalid_bits(), Some(0x0001));
    }

    #[test]
    fn failed_set_raw_keeps_previous_bits() {
        let mut options = TemplateOptions::default().with_add_new_properties(true);
        assert!(options.set_raw(0x0001).is_err());
        assert!(options.is_exactly(TemplateFlags::ADD_NEW_PROPERTIES));
    }

    #[test]
    fn set_flag_never_stores_unknown_bits() {
        let mut options = ParseOptions::default();
        options.set_flag(ParseFlags::from_bits_retain(0x8000_0000), true);
        assert_eq!(options, ParseOptions::default());
        assert_eq!(options.raw() & !ParseOptions::valid_mask(), 0);

        // A property bit outside the alias vocabulary is dropped as well
        let mut form = AliasOptions::default();
        form.set_flag(AliasFlags::from_bits_retain(0x0100) | AliasFlags::PROP_ARRAY, true);
        assert_eq!(form.flags(), AliasFlags::PROP_ARRAY);
        assert_eq!(form.debug_string(), "PROP_ARRAY");
    }

    #[test]
    fn equality_and_hash_follow_bits() {
        use std::collections::HashSet;

        let a = SerializeOptions::default().with_sort(true).with_indent("\t");
        let b = SerializeOptions::default().with_sort(true);
        assert_eq!(a, b);

        let set: HashSet<_> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
    }
}

mod parse {
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;
    use xmpkit_options::ParseOptions;

    #[test]
    fn fresh_options_defaults() {
        let options = ParseOptions::default();
        assert!(options.fix_control_chars());
        assert!(options.accept_latin1());
        assert!(options.disallow_doctype());
        assert!(!options.require_xmp_meta());
    }

    #[test]
    fn node_limits_are_copied() {
        let mut supplied = HashMap::new();
        supplied.insert("rdf:Bag".to_string(), 10);

        let mut options = ParseOptions::default();
        options.set_nodes_to_limit(supplied.clone()).unwrap();

        let mut read_back = options.nodes_to_limit();
        assert_eq!(read_back, supplied);

        read_back.insert("rdf:Seq".to_string(), 1);
        assert_eq!(options.nodes_to_limit().len(), 1);
        assert_eq!(options.node_limit("rdf:Seq"), None);
    }
}

mod serialize {
    use pretty_assertions::assert_eq;
    use xmpkit_options::{Encoding, OptionSet, SerializeFlags, SerializeOptions};

    #[test]
    fn fresh_options_defaults() {
        let options = SerializeOptions::default();
        assert_eq!(options.padding(), 2048);
        assert_eq!(options.newline(), "\n");
        assert_eq!(options.indent(), "  ");
    }

    #[test]
    fn utf16_big_then_little_endian() {
        let mut options = SerializeOptions::default();
        options.set_encode_utf16be(true);
        options.set_encode_utf16le(true);
        assert!(options.encode_utf16le());
        assert!(!options.encode_utf16be());
        assert_eq!(options.encoding(), Encoding::Utf16Le);
    }

    #[test]
    fn clone_copies_all_fields() {
        let mut original = SerializeOptions::default();
        original
            .set_flags(SerializeFlags::OMIT_XMPMETA_ELEMENT)
            .unwrap();
        original.set_base_indent(3);
        original.set_indent("\t");
        original.set_newline("\r\n");
        original.set_padding(512);

        let mut copy = original.clone();
        assert_eq!(copy.raw(), original.raw());
        assert_eq!(copy.base_indent(), 3);
        assert_eq!(copy.indent(), "\t");
        assert_eq!(copy.newline(), "\r\n");
        assert_eq!(copy.padding(), 512);

        copy.set_base_indent(0);
        copy.set_newline("\n");
        copy.set_omit_xmpmeta_element(false);
        assert_eq!(original.base_indent(), 3);
        assert_eq!(original.newline(), "\r\n");
        assert!(original.omit_xmpmeta_element());
    }

    #[test]
    fn named_setters_skip_consistency_check() {
        let options = SerializeOptions::default()
            .with_omit_packet_wrapper(true)
            .with_readonly_packet(true);
        assert!(options.omit_packet_wrapper() && options.readonly_packet());
        assert!(SerializeOptions::from_raw(options.raw()).is_err());
    }
}

mod debug_string {
    use pretty_assertions::assert_eq;
    use xmpkit_options::{IteratorOptions, OptionSet, TemplateFlags, TemplateOptions, NO_OPTIONS};

    #[test]
    fn empty_is_none_token() {
        assert_eq!(IteratorOptions::default().debug_string(), NO_OPTIONS);
        assert_eq!(NO_OPTIONS, "<none>");
    }

    #[test]
    fn names_lowest_bit_first() {
        let mut options = TemplateOptions::default();
        options
            .set_flags(
                TemplateFlags::REPLACE_WITH_DELETE_EMPTY
                    | TemplateFlags::CLEAR_UNNAMED_PROPERTIES
                    | TemplateFlags::INCLUDE_INTERNAL_PROPERTIES,
            )
            .unwrap();
        assert_eq!(
            options.debug_string(),
            "CLEAR_UNNAMED_PROPERTIES | INCLUDE_INTERNAL_PROPERTIES | REPLACE_WITH_DELETE_EMPTY"
        );
    }
}
