//! # Compilation Tests
//!
//! End-to-end fixtures through the registry: a mixed element list compiled
//! to every backend, with the full expected program inline. These pin down
//! the exact emitted syntax — header/footer framing, token order, rounding
//! and the per-language quirks — so a backend change shows up as a readable
//! program diff.

use pretty_assertions::assert_eq;

use etiqueta::Registry;
use etiqueta::import::{self, ppla};
use etiqueta::label::{
    BarcodeElement, BoxElement, Element, Symbology, TextElement,
};

/// Text + Code 128 + box, the original editor's starter objects.
fn sample_elements() -> Vec<Element> {
    vec![
        Element::Text(TextElement {
            x: 50.0,
            y: 50.0,
            rotation: 0.0,
            content: "TEXTO".to_string(),
            font_size: 25,
            scale_x: 1.0,
            scale_y: 1.0,
        }),
        Element::Barcode(BarcodeElement {
            x: 50.0,
            y: 120.0,
            rotation: 0.0,
            data: "12345678".to_string(),
            symbology: Symbology::Code128,
            show_text: true,
            height: 40.0,
            scale_x: 1.0,
            scale_y: 1.0,
        }),
        Element::Box(BoxElement {
            x: 20.0,
            y: 20.0,
            rotation: 0.0,
            width: 200.0,
            height: 160.0,
            stroke_width: 2,
            scale_x: 1.0,
            scale_y: 1.0,
        }),
    ]
}

#[test]
fn zpl_program() {
    let code = Registry::standard()
        .compile("ZPL", &sample_elements())
        .unwrap();
    assert_eq!(
        code,
        "^XA\n\
         ^MNY\n\
         ^FO50,50^A0N,25,25^FDTEXTO^FS\n\
         ^FO50,120^BY2^BCN,40,Y,N,N^FD12345678^FS\n\
         ^FO20,20^GB200,160,2^FS\n\
         ^XZ"
    );
}

#[test]
fn ppla_program() {
    let code = Registry::standard()
        .compile("PPLA", &sample_elements())
        .unwrap();
    assert_eq!(
        code,
        "n\nq800\nQ400,24\nS4\nD8\n\
         A0,50,50,1,1,3,3,N,\"TEXTO\"\n\
         1E050,120,0,3,2,0,40,B,\"12345678\"\n\
         X20,20,2,200\n\
         X20,180,2,200\n\
         Y20,20,2,160\n\
         Y220,20,2,160\n\
         P1\n"
    );
}

#[test]
fn pplb_program() {
    let code = Registry::standard()
        .compile("PPLB", &sample_elements())
        .unwrap();
    assert_eq!(
        code,
        "<STX>n\n<STX>m\n<STX>M0800\n<STX>L0400\n<STX>D0\n\
         <STX>1911A0V50H50M3L3STEXTO\n\
         <STX>1E0V120H50P3W2Bf40d2,12345678\n\
         <STX>1XH20V20T2L200\n\
         <STX>1XH20V180T2L200\n\
         <STX>1YH20V20T2L160\n\
         <STX>1YH220V20T2L160\n\
         <STX>E\n"
    );
}

#[test]
fn epl_program() {
    let code = Registry::standard()
        .compile("EPL", &sample_elements())
        .unwrap();
    assert_eq!(
        code,
        "N\nq800\nQ400,24\n\
         A50,50,0,3,1,1,N,\"TEXTO\"\n\
         B50,120,0,1,2,2,40,B,\"12345678\"\n\
         LO20,20,200,2\n\
         LO20,180,200,2\n\
         LO20,20,2,160\n\
         LO220,20,2,160\n\
         P1\n"
    );
}

#[test]
fn empty_list_compiles_to_bare_frame_everywhere() {
    let registry = Registry::standard();
    let expected = [
        ("ZPL", "^XA\n^MNY\n^XZ"),
        ("PPLA", "n\nq800\nQ400,24\nS4\nD8\nP1\n"),
        ("PPLB", "<STX>n\n<STX>m\n<STX>M0800\n<STX>L0400\n<STX>D0\n<STX>E\n"),
        ("EPL", "N\nq800\nQ400,24\nP1\n"),
    ];
    for (id, program) in expected {
        assert_eq!(registry.compile(id, &[]).unwrap(), program, "{id}");
    }
}

#[test]
fn element_order_is_print_order_everywhere() {
    let registry = Registry::standard();
    let first = TextElement {
        x: 0.0,
        y: 0.0,
        rotation: 0.0,
        content: "FIRST".to_string(),
        font_size: 20,
        scale_x: 1.0,
        scale_y: 1.0,
    };
    let mut second = first.clone();
    second.content = "SECOND".to_string();
    let elements = vec![Element::Text(first), Element::Text(second)];

    for info in registry.languages() {
        let code = registry.compile(info.id, &elements).unwrap();
        let first_at = code.find("FIRST").unwrap();
        let second_at = code.find("SECOND").unwrap();
        assert!(first_at < second_at, "{}: {code}", info.id);
    }
}

#[test]
fn rotation_buckets_agree_across_backends() {
    let registry = Registry::standard();
    // 100° buckets to Rotated90 for every backend: 'R' in ZPL, '1' elsewhere.
    let mut text = TextElement {
        x: 10.0,
        y: 10.0,
        rotation: 100.0,
        content: "GIRO".to_string(),
        font_size: 30,
        scale_x: 1.0,
        scale_y: 1.0,
    };
    let elements = vec![Element::Text(text.clone())];

    assert!(registry.compile("ZPL", &elements).unwrap().contains("^A0R,"));
    assert!(registry.compile("PPLA", &elements).unwrap().contains("A1,10,10,"));
    assert!(registry.compile("PPLB", &elements).unwrap().contains("1911A1V10H10"));
    assert!(registry.compile("EPL", &elements).unwrap().contains("A10,10,1,3,1,1,N,"));

    // 44.9° still buckets to Normal everywhere.
    text.rotation = 44.9;
    let elements = vec![Element::Text(text)];
    assert!(registry.compile("ZPL", &elements).unwrap().contains("^A0N,"));
    assert!(registry.compile("EPL", &elements).unwrap().contains("A10,10,0,3,1,1,N,"));
}

/// Compiling to PPLA and decoding the result is NOT a round trip: the
/// generator writes the `A.../X.../Y...` dialect while the importer parses
/// the fixed-width `1{class}...` dialect. This test documents the
/// limitation rather than asserting an inverse.
#[test]
fn ppla_compile_then_decode_is_not_a_round_trip() {
    let elements = sample_elements();
    let code = Registry::standard().compile("PPLA", &elements).unwrap();
    let decode = ppla::decode(&code);

    // Text (`A...`) and box (`X...`/`Y...`) lines are not fixed-width
    // drawables to the importer; the generated barcode line fails its
    // field grid. Nothing survives the trip.
    assert!(decode.commands.len() < elements.len());
    assert!(!decode.skipped.is_empty());
}

#[test]
fn import_then_estimate_rehydrates_canvas_bounds() {
    let input = "m\nK1504\n121100004100075101Texto exemplo\n1E2212500450075700001257541\nQ\n";
    let decode = ppla::decode(input);
    let elements = decode.elements();
    assert_eq!(elements.len(), 2);

    let dims = import::estimate(&elements);
    // Furthest element reaches x=7570, y=4500 decimillimetres.
    assert_eq!(dims.width_mm, 777);
    assert_eq!(dims.height_mm, 480);

    // Decoded elements recompile cleanly to every backend.
    let registry = Registry::standard();
    for info in registry.languages() {
        let code = registry.compile(info.id, &elements).unwrap();
        assert!(!code.is_empty(), "{}", info.id);
    }
}
