use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use proptest::prelude::*;
use vfsh::tree::loader::parse_str;
use vfsh::tree::{File, TransportEncoding};

fn wrap(encoded: &str, width: usize) -> String {
    encoded
        .as_bytes()
        .chunks(width)
        .map(|chunk| String::from_utf8_lossy(chunk).into_owned())
        .collect::<Vec<_>>()
        .join("\n")
}

proptest! {
    #[test]
    fn base64_bytes_round_trip(bytes in prop::collection::vec(any::<u8>(), 0..256)) {
        let file = File::new("blob", STANDARD.encode(&bytes), TransportEncoding::Base64);
        prop_assert_eq!(file.decode_bytes().unwrap().into_owned(), bytes.clone());
    }

    #[test]
    fn base64_text_round_trip(text in ".{0,64}") {
        let file = File::new("note", STANDARD.encode(text.as_bytes()), TransportEncoding::Base64);
        prop_assert_eq!(file.decode_text().unwrap().into_owned(), text.clone());
        prop_assert_eq!(file.decode_bytes().unwrap().into_owned(), text.as_bytes().to_vec());
    }

    #[test]
    fn wrapped_base64_round_trip(
        bytes in prop::collection::vec(any::<u8>(), 1..256),
        width in 1usize..80,
    ) {
        let wrapped = wrap(&STANDARD.encode(&bytes), width);
        let file = File::new("blob", wrapped.clone(), TransportEncoding::Base64);
        prop_assert_eq!(file.decode_bytes().unwrap().into_owned(), bytes.clone());

        let xml = format!(
            "<vfs><file name=\"blob\" encoding=\"base64\">\n  {}\n</file></vfs>",
            wrapped
        );
        let root = parse_str(&xml).unwrap();
        let node = root.child("blob").unwrap().as_node_ref();
        let loaded = node.as_file().unwrap();
        prop_assert_eq!(loaded.decode_bytes().unwrap().into_owned(), bytes.clone());
    }

    #[test]
    fn plain_text_is_returned_verbatim(text in ".{0,64}") {
        let file = File::new("note", text.clone(), TransportEncoding::None);
        prop_assert_eq!(file.decode_text().unwrap().into_owned(), text.clone());
        prop_assert_eq!(file.decode_bytes().unwrap().into_owned(), text.as_bytes().to_vec());
    }
}
