use once_cell::sync::Lazy;
use quarry_anvil::{Palette, Rgba};

/// Built-in block colours for the numeric-id era, loosely based on the
/// default texture pack. Entries are `(id, meta, argb)`; thin or see-through
/// blocks carry a reduced alpha so the renderer composites what lies under
/// them. Air (id 0) has no entry and stays transparent. Lookups are exact;
/// the renderer handles the fall-back to meta 0.
const BLOCK_COLOURS: &[(u8, u8, u32)] = &[
    (1, 0, 0xff7d7d7d),   // stone
    (2, 0, 0xff5d923a),   // grass
    (3, 0, 0xff866043),   // dirt
    (4, 0, 0xff828282),   // cobblestone
    (5, 0, 0xff9e804f),   // oak planks
    (5, 1, 0xff675132),   // spruce planks
    (5, 2, 0xffc8b77a),   // birch planks
    (5, 3, 0xff9a6e4d),   // jungle planks
    (6, 0, 0x7f4a6b27),   // sapling
    (7, 0, 0xff565656),   // bedrock
    (8, 0, 0xb2345fd7),   // flowing water
    (9, 0, 0xb2345fd7),   // water
    (10, 0, 0xffd45a12),  // flowing lava
    (11, 0, 0xffd45a12),  // lava
    (12, 0, 0xffdbd3a0),  // sand
    (13, 0, 0xff7e7c7a),  // gravel
    (14, 0, 0xff91815a),  // gold ore
    (15, 0, 0xff87827e),  // iron ore
    (16, 0, 0xff737373),  // coal ore
    (17, 0, 0xff665132),  // oak log
    (17, 1, 0xff4b3a26),  // spruce log
    (17, 2, 0xffd6cfb0),  // birch log
    (17, 3, 0xff584426),  // jungle log
    (18, 0, 0xff2e6b22),  // leaves
    (19, 0, 0xffb6b639),  // sponge
    (20, 0, 0x50daf0f4),  // glass
    (21, 0, 0xff667086),  // lapis ore
    (22, 0, 0xff1d47a5),  // lapis block
    (23, 0, 0xff6c6c6c),  // dispenser
    (24, 0, 0xffd5cd94),  // sandstone
    (25, 0, 0xff654433),  // note block
    (26, 0, 0xff8e1616),  // bed
    (30, 0, 0x80dcdcdc),  // cobweb
    (31, 0, 0x7f6d9644),  // tall grass
    (32, 0, 0x7f946428),  // dead bush
    (35, 0, 0xffd9d9d9),  // wool, white
    (35, 1, 0xffdb7d3e),  // orange
    (35, 2, 0xffb350bc),  // magenta
    (35, 3, 0xff6b8ac9),  // light blue
    (35, 4, 0xffb1a627),  // yellow
    (35, 5, 0xff41ae38),  // lime
    (35, 6, 0xffd08499),  // pink
    (35, 7, 0xff404040),  // gray
    (35, 8, 0xff9aa1a1),  // light gray
    (35, 9, 0xff2e6e89),  // cyan
    (35, 10, 0xff7e3db5), // purple
    (35, 11, 0xff2e388d), // blue
    (35, 12, 0xff4f321f), // brown
    (35, 13, 0xff35461b), // green
    (35, 14, 0xff963430), // red
    (35, 15, 0xff191616), // black
    (37, 0, 0x7fe5c40b),  // dandelion
    (38, 0, 0x7fd2250c),  // rose
    (39, 0, 0x7f8a6953),  // brown mushroom
    (40, 0, 0x7fc23531),  // red mushroom
    (41, 0, 0xfff9ec4e),  // gold block
    (42, 0, 0xffdbdbdb),  // iron block
    (43, 0, 0xffa8a8a8),  // double stone slab
    (44, 0, 0xffa8a8a8),  // stone slab
    (45, 0, 0xffaa543b),  // bricks
    (46, 0, 0xffdb441a),  // tnt
    (47, 0, 0xffb4905a),  // bookshelf
    (48, 0, 0xff627162),  // mossy cobblestone
    (49, 0, 0xff14121d),  // obsidian
    (50, 0, 0x7fffd800),  // torch
    (51, 0, 0x9fe59c38),  // fire
    (52, 0, 0xff27404f),  // monster spawner
    (53, 0, 0xff9e804f),  // oak stairs
    (54, 0, 0xff8b6d3c),  // chest
    (56, 0, 0xff818c8f),  // diamond ore
    (57, 0, 0xff61dbd5),  // diamond block
    (58, 0, 0xff7b4d2b),  // crafting table
    (59, 0, 0x7f83b144),  // wheat
    (60, 0, 0xff734b2d),  // farmland
    (61, 0, 0xff6d6d6d),  // furnace
    (62, 0, 0xff6d6d6d),  // lit furnace
    (64, 0, 0x7f9e804f),  // oak door
    (65, 0, 0x7fa8834f),  // ladder
    (66, 0, 0xbf766859),  // rail
    (67, 0, 0xff828282),  // cobblestone stairs
    (78, 0, 0xfff0fbfb),  // snow layer
    (79, 0, 0xbf7dacfe),  // ice
    (80, 0, 0xfff1fbfb),  // snow block
    (81, 0, 0xff58822d),  // cactus
    (82, 0, 0xff9ea4af),  // clay
    (83, 0, 0x7f94c065),  // sugar cane
    (86, 0, 0xffc07615),  // pumpkin
    (87, 0, 0xff6f3634),  // netherrack
    (88, 0, 0xff554134),  // soul sand
    (89, 0, 0xfff9d49c),  // glowstone
    (91, 0, 0xffc07615),  // jack o'lantern
    (98, 0, 0xff7a7a7a),  // stone bricks
    (99, 0, 0xff8a6953),  // brown mushroom block
    (100, 0, 0xffc23531), // red mushroom block
    (102, 0, 0x50daf0f4), // glass pane
    (103, 0, 0xff9ba618), // melon
    (106, 0, 0x7f2e6b22), // vines
    (110, 0, 0xff6f6265), // mycelium
    (111, 0, 0x7f0c5d14), // lily pad
    (112, 0, 0xff2c161a), // nether brick
    (121, 0, 0xffdde0a5), // end stone
    (125, 0, 0xff9e804f), // double wooden slab
    (126, 0, 0xff9e804f), // wooden slab
    (129, 0, 0xff6a8b61), // emerald ore
    (133, 0, 0xff51d975), // emerald block
    (145, 0, 0xff404040), // anvil
    (152, 0, 0xffab1b09), // redstone block
    (155, 0, 0xffece9e2), // quartz block
    (159, 0, 0xffd1b1a1), // stained clay
    (170, 0, 0xffb5a218), // hay bale
    (172, 0, 0xff925940), // hardened clay
    (173, 0, 0xff191919), // coal block
];

// one slot per (id, meta) pair: 8 id bits, 4 meta bits
static SLOTS: Lazy<[Option<Rgba>; 4096]> = Lazy::new(|| {
    let mut slots = [None; 4096];
    for &(id, meta, argb) in BLOCK_COLOURS {
        slots[slot(id, meta)] = Some(rgba(argb));
    }
    slots
});

fn slot(id: u8, meta: u8) -> usize {
    id as usize | ((meta as usize & 0x0f) << 8)
}

fn rgba(argb: u32) -> Rgba {
    [
        (argb >> 16) as u8,
        (argb >> 8) as u8,
        argb as u8,
        (argb >> 24) as u8,
    ]
}

/// The built-in palette.
pub struct BlockColours;

impl Palette for BlockColours {
    fn pick(&self, id: u8, meta: u8) -> Option<Rgba> {
        SLOTS[slot(id, meta)]
    }
}
