/// Example printing the nnkpts block of a small grid and of a closed k-path
///
/// The grid part shows the three forward neighbours of every k-point and the G-vectors
/// produced by periodic wraparound; the path part shows a loop closed through k(1) + b2.
use wannier_nnkp::lattice::{AxisOrder, GridDimensions};
use wannier_nnkp::neighbours::{path_neighbours, NeighborGraphBuilder};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Neighbours of a 2 x 2 x 1 grid ===\n");
    let dims = GridDimensions::new(2, 2, 1)?;
    for record in NeighborGraphBuilder::new().with_grid(dims).build()? {
        println!("{}", record);
    }

    println!("\n=== Same grid, first axis fastest ===\n");
    let records = NeighborGraphBuilder::new()
        .with_grid(dims)
        .with_axis_order(AxisOrder::identity())
        .build()?;
    for record in records {
        println!("{}", record);
    }

    println!("\n=== Closed k-path of 5 points through k(1) + b2 ===\n");
    for record in path_neighbours(5, 2)? {
        println!("{}", record);
    }

    Ok(())
}
