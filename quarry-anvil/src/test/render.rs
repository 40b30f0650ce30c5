use std::sync::Mutex;

use quarry_nbt::{List, Tag, TagId, Value};

use crate::test::{
    chunk_doc, single_block_sections, zlib, RegionBuilder, TempWorld, TestPalette, TestSink, GLASS,
    STONE,
};
use crate::{chunk_colours, darken, render_world_map, MapBounds};

fn level_tag(sections: &[Option<(Vec<i8>, Vec<i8>)>]) -> Tag {
    let items = sections
        .iter()
        .map(|section| {
            let children = match section {
                Some((blocks, data)) => vec![
                    Tag::new("Blocks", Value::ByteArray(blocks.clone())),
                    Tag::new("Data", Value::ByteArray(data.clone())),
                ],
                None => vec![],
            };
            Value::Compound(children)
        })
        .collect();

    Tag::new(
        "Level",
        Value::Compound(vec![Tag::new(
            "Sections",
            Value::List(List::new(TagId::Compound, items)),
        )]),
    )
}

#[test]
fn even_layers_take_the_darkened_colour() {
    // stone at world y = 64: list index 4, section-local y 0, an even layer
    let level = level_tag(&single_block_sections(4, 0, 0, 0, 1, 0));
    let colours = chunk_colours(level.view(), &TestPalette);
    assert_eq!(colours[0], [104, 104, 104, 255]);
    assert_eq!(colours[0], darken(STONE));

    // stone at world y = 65: an odd layer keeps the full colour
    let level = level_tag(&single_block_sections(4, 1, 0, 0, 1, 0));
    let colours = chunk_colours(level.view(), &TestPalette);
    assert_eq!(colours[0], STONE);
}

#[test]
fn other_columns_stay_transparent() {
    let level = level_tag(&single_block_sections(0, 1, 3, 2, 1, 0));
    let colours = chunk_colours(level.view(), &TestPalette);
    assert_eq!(colours[3 * 16 + 2], STONE);
    assert_eq!(colours.iter().filter(|c| **c != [0, 0, 0, 0]).count(), 1);
}

#[test]
fn translucent_colours_composite_over_what_is_below() {
    let mut blocks = vec![0i8; 4096];
    blocks[768] = 20; // glass at y = 3, odd, no darkening
    blocks[512] = 1; // stone at y = 2
    let level = level_tag(&[Some((blocks, vec![0i8; 2048]))]);

    let colours = chunk_colours(level.view(), &TestPalette);
    // glass over stone: stone shows through scaled by the glass alpha
    assert_eq!(colours[0], [145, 153, 166, 255]);
}

#[test]
fn translucent_world_stays_translucent() {
    let level = level_tag(&single_block_sections(0, 3, 0, 0, 20, 0));
    let colours = chunk_colours(level.view(), &TestPalette);
    assert_eq!(colours[0], GLASS);

    // and at an even height the glass itself is darkened
    let level = level_tag(&single_block_sections(0, 2, 0, 0, 20, 0));
    let colours = chunk_colours(level.view(), &TestPalette);
    assert_eq!(colours[0], [190, 209, 242, 100]);
}

#[test]
fn unknown_metadata_falls_back_to_the_base_colour() {
    let level = level_tag(&single_block_sections(0, 1, 0, 0, 1, 5));
    let colours = chunk_colours(level.view(), &TestPalette);
    assert_eq!(colours[0], STONE);
}

#[test]
fn unknown_blocks_are_invisible() {
    let level = level_tag(&single_block_sections(0, 1, 0, 0, 99, 0));
    let colours = chunk_colours(level.view(), &TestPalette);
    assert_eq!(colours[0], [0, 0, 0, 0]);
}

#[test]
fn missing_sections_render_transparent() {
    let level = Tag::new("Level", Value::Compound(vec![]));
    let colours = chunk_colours(level.view(), &TestPalette);
    assert!(colours.iter().all(|c| *c == [0, 0, 0, 0]));
}

#[test]
fn solid_chunk_is_fully_opaque() {
    let blocks = vec![1i8; 4096];
    let level = level_tag(&[Some((blocks, vec![0i8; 2048]))]);
    let colours = chunk_colours(level.view(), &TestPalette);

    assert!(colours.iter().all(|c| c[3] == 0xff));
    // the top of every column is y = 15, an odd layer
    assert!(colours.iter().all(|c| *c == STONE));
}

#[test]
fn one_block_worldmap_emits_one_stone_pixel() {
    let world = TempWorld::new("render-one-block");
    let doc = chunk_doc(&single_block_sections(0, 1, 0, 0, 1, 0));
    world.write_region(0, 0, RegionBuilder::new().chunk(0, 0, 2, &zlib(&doc)).bytes());

    let bounds = MapBounds {
        center_x: 0,
        center_z: 0,
        width: 1,
        height: 1,
    };
    let sink = Mutex::new(TestSink::new(1, 1));
    render_world_map(&world.root, bounds, &TestPalette, &sink);

    let sink = sink.into_inner().unwrap();
    assert_eq!(sink.writes, 1);
    assert_eq!(sink.pixel(0, 0), STONE);
}

#[test]
fn unpopulated_region_renders_fully_transparent() {
    let world = TempWorld::new("render-empty");
    world.write_region(0, 0, RegionBuilder::new().bytes());

    let bounds = MapBounds {
        center_x: 16,
        center_z: 16,
        width: 32,
        height: 32,
    };
    let sink = Mutex::new(TestSink::new(32, 32));
    render_world_map(&world.root, bounds, &TestPalette, &sink);

    let sink = sink.into_inner().unwrap();
    assert_eq!(sink.writes, 0);
    assert!(sink.pixels.iter().all(|p| *p == [0, 0, 0, 0]));
}

#[test]
fn corrupt_chunks_are_skipped_not_fatal() {
    let world = TempWorld::new("render-corrupt");
    let doc = chunk_doc(&single_block_sections(0, 1, 0, 0, 1, 0));
    world.write_region(
        0,
        0,
        RegionBuilder::new()
            .chunk(0, 0, 2, &[0xba, 0xad]) // does not inflate
            .chunk(1, 0, 2, &zlib(&doc))
            .bytes(),
    );

    let bounds = MapBounds {
        center_x: 16,
        center_z: 8,
        width: 32,
        height: 16,
    };
    let sink = Mutex::new(TestSink::new(32, 16));
    render_world_map(&world.root, bounds, &TestPalette, &sink);

    let sink = sink.into_inner().unwrap();
    assert_eq!(sink.pixel(16, 0), STONE);
    assert_eq!(sink.writes, 1);
}

#[test]
fn rendering_is_deterministic() {
    let world = TempWorld::new("render-deterministic");
    let mut blocks = vec![0i8; 4096];
    for (i, b) in blocks.iter_mut().enumerate() {
        if i % 3 == 0 {
            *b = 1;
        } else if i % 7 == 0 {
            *b = 20;
        }
    }
    let doc = chunk_doc(&[Some((blocks, vec![0i8; 2048]))]);
    world.write_region(0, 0, RegionBuilder::new().chunk(0, 0, 2, &zlib(&doc)).bytes());

    let bounds = MapBounds {
        center_x: 8,
        center_z: 8,
        width: 16,
        height: 16,
    };

    let render = || {
        let sink = Mutex::new(TestSink::new(16, 16));
        render_world_map(&world.root, bounds, &TestPalette, &sink);
        sink.into_inner().unwrap().pixels
    };

    assert_eq!(render(), render());
}
