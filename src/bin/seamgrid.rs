use clap::{App, Arg};
use log::info;
use seamgrid::SeamGrid;

fn main() {
    env_logger::init();

    let matches = App::new("seamgrid")
        .version("0.1.0")
        .about("Content-aware image resizing")
        .arg(
            Arg::with_name("input")
                .help("The image to carve")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("output")
                .help("Where to write the carved image")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::with_name("width")
                .long("width")
                .takes_value(true)
                .help("Target width in pixels (defaults to the current width)"),
        )
        .arg(
            Arg::with_name("height")
                .long("height")
                .takes_value(true)
                .help("Target height in pixels (defaults to the current height)"),
        )
        .get_matches();

    let image = image::open(matches.value_of("input").unwrap()).unwrap();
    let mut grid = SeamGrid::new(&image).unwrap();

    let target_width: u32 = matches
        .value_of("width")
        .map_or(grid.width(), |w| w.parse().unwrap());
    let target_height: u32 = matches
        .value_of("height")
        .map_or(grid.height(), |h| h.parse().unwrap());

    if target_width > grid.width() || target_height > grid.height() {
        eprintln!("seamgrid cannot upscale an image");
        std::process::exit(1);
    }
    if target_width == 0 || target_height == 0 {
        eprintln!("seamgrid cannot carve an image away entirely");
        std::process::exit(1);
    }

    // Alternate directions while both dimensions still have seams to
    // give, then finish out whichever dimension is left.
    let mut vertical_turn = true;
    while grid.width() > target_width && grid.height() > target_height {
        if vertical_turn {
            let seam = grid.find_vertical_seam();
            grid.remove_vertical_seam(&seam).unwrap();
        } else {
            let seam = grid.find_horizontal_seam();
            grid.remove_horizontal_seam(&seam).unwrap();
        }
        vertical_turn = !vertical_turn;
        info!("B: {}, {}", grid.width(), grid.height());
    }
    while grid.width() > target_width {
        let seam = grid.find_vertical_seam();
        grid.remove_vertical_seam(&seam).unwrap();
        info!("W: {}, {}", grid.width(), grid.height());
    }
    while grid.height() > target_height {
        let seam = grid.find_horizontal_seam();
        grid.remove_horizontal_seam(&seam).unwrap();
        info!("H: {}, {}", grid.width(), grid.height());
    }

    grid.picture()
        .save(matches.value_of("output").unwrap())
        .unwrap();
}
