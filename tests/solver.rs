use mazepath::{
    solver::{self, VisitMask},
    Direction, Error, Grid, Position, Tile,
};

fn grid(rows: &[&str]) -> Grid {
    rows.join("\n").parse().unwrap()
}

fn walk(grid: &Grid, path: &[Direction]) -> Position {
    let mut pos = grid.locate(Tile::Start).unwrap();
    for dir in path {
        pos = pos.neighbor(*dir).unwrap();
        assert!(grid.is_passable(&pos), "moved onto {} in\n{}", pos, grid);
    }

    pos
}

// Relaxes distances until nothing changes, without any queue.
fn relaxed_distance(grid: &Grid) -> Option<usize> {
    let start = grid.locate(Tile::Start)?;
    let end = grid.locate(Tile::End)?;
    let mut dist = vec![vec![None::<usize>; grid.col_n()]; grid.row_n()];
    dist[start.r()][start.c()] = Some(0);
    let mut changed = true;
    while changed {
        changed = false;
        for r in 0..grid.row_n() {
            for c in 0..grid.col_n() {
                let pos = Position::new(r, c);
                if !grid.is_passable(&pos) {
                    continue;
                }
                for dir in Direction::all_dirs() {
                    let Some(next) = pos.neighbor(*dir).filter(|p| grid.is_passable(p)) else {
                        continue;
                    };
                    if let Some(d) = dist[next.r()][next.c()] {
                        if dist[r][c].map_or(true, |cur| d + 1 < cur) {
                            dist[r][c] = Some(d + 1);
                            changed = true;
                        }
                    }
                }
            }
        }
    }

    dist[end.r()][end.c()]
}

#[test]
fn straight_corridor_moves_right_twice() {
    let path = solver::solve(&grid(&["S.E"])).unwrap();
    assert_eq!(path, vec![Direction::Right, Direction::Right]);
}

#[test]
fn wall_between_start_and_end_has_no_path() {
    assert_eq!(solver::solve(&grid(&["S#E"])), Err(Error::NoPath));
}

#[test]
fn bent_corridor_follows_the_only_route() {
    let path = solver::solve(&grid(&["S..", "##.", "..E"])).unwrap();
    assert_eq!(
        path,
        vec![
            Direction::Right,
            Direction::Right,
            Direction::Down,
            Direction::Down
        ]
    );
}

#[test]
fn missing_start_or_end_is_invalid() {
    let no_start = solver::solve(&grid(&["...", ".#E"])).unwrap_err();
    assert_eq!(no_start, Error::NoStartPosition);
    assert!(no_start.is_invalid_maze());

    let no_end = solver::solve(&grid(&["S..", "..."])).unwrap_err();
    assert_eq!(no_end, Error::NoEndPosition);
    assert!(no_end.is_invalid_maze());
    assert!(!Error::NoPath.is_invalid_maze());
}

#[test]
fn adjacent_end_is_one_move() {
    assert_eq!(solver::solve(&grid(&["SE"])).unwrap(), vec![Direction::Right]);
}

#[test]
fn same_start_and_end_is_empty_path() {
    let maze = grid(&["S.", ".E"]);
    let pos = Position::new(0, 1);
    assert_eq!(solver::find_path(&maze, &pos, &pos), Ok(Vec::new()));
}

#[test]
fn walls_as_endpoints_have_no_path() {
    let maze = grid(&["S#", ".E"]);
    let wall = Position::new(0, 1);
    let end = maze.locate(Tile::End).unwrap();
    assert_eq!(solver::find_path(&maze, &wall, &end), Err(Error::NoPath));
    assert_eq!(
        solver::find_path(&maze, &end, &Position::new(5, 5)),
        Err(Error::NoPath)
    );
}

#[test]
fn enclosed_end_has_no_path() {
    let maze = grid(&["S....", "..###", "..#E#", "..###"]);
    assert_eq!(solver::solve(&maze), Err(Error::NoPath));
    assert_eq!(solver::shortest_distance(&maze), None);
}

#[test]
fn ties_break_by_up_down_left_right() {
    assert_eq!(
        solver::solve(&grid(&["S.", ".E"])).unwrap(),
        vec![Direction::Down, Direction::Right]
    );
    assert_eq!(
        solver::solve(&grid(&["S...", ".##.", "...E"])).unwrap(),
        vec![
            Direction::Down,
            Direction::Down,
            Direction::Right,
            Direction::Right,
            Direction::Right
        ]
    );
    assert_eq!(
        solver::solve(&grid(&["E.", ".S"])).unwrap(),
        vec![Direction::Up, Direction::Left]
    );
}

#[test]
fn first_start_and_end_in_row_major_order_win() {
    let path = solver::solve(&grid(&["S.S", "...", "..E"])).unwrap();
    assert_eq!(path.len(), 4);
    assert_eq!(walk(&grid(&["S.S", "...", "..E"]), &path), Position::new(2, 2));

    let path = solver::solve(&grid(&["S.EE"])).unwrap();
    assert_eq!(path, vec![Direction::Right, Direction::Right]);
}

#[test]
fn solving_leaves_grid_untouched_and_repeats() {
    let maze = grid(&["S..#", ".#..", "...E"]);
    let copy = maze.clone();
    let first = solver::solve(&maze);
    let second = solver::solve(&copy);
    assert_eq!(first, second);
    assert_eq!(maze, copy);
    assert_eq!(solver::solve(&maze), first);
}

#[test]
fn path_never_leaves_grid_or_enters_walls() {
    let maze = grid(&[
        "S....#....",
        ".###.#.##.",
        ".#...#..#.",
        ".#.###.##.",
        ".#......#E",
    ]);
    let path = solver::solve(&maze).unwrap();
    assert_eq!(walk(&maze, &path), maze.locate(Tile::End).unwrap());
    assert_eq!(Some(path.len()), relaxed_distance(&maze));
}

#[test]
fn every_three_by_three_layout_matches_relaxed_distance() {
    let free_cells = [
        (0, 1),
        (0, 2),
        (1, 0),
        (1, 1),
        (1, 2),
        (2, 0),
        (2, 1),
    ];
    for wall_bits in 0u32..(1 << free_cells.len()) {
        let mut rows = vec![vec!['.'; 3]; 3];
        rows[0][0] = 'S';
        rows[2][2] = 'E';
        for (bit, (r, c)) in free_cells.iter().enumerate() {
            if wall_bits & (1 << bit) != 0 {
                rows[*r][*c] = '#';
            }
        }
        let text = rows
            .iter()
            .map(|row| row.iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n");
        let maze: Grid = text.parse().unwrap();

        match (solver::solve(&maze), relaxed_distance(&maze)) {
            (Ok(path), Some(dist)) => {
                assert_eq!(path.len(), dist, "in\n{}", maze);
                assert_eq!(walk(&maze, &path), Position::new(2, 2));
            }
            (Err(Error::NoPath), None) => {}
            (got, want) => panic!("got {:?}, want {:?} in\n{}", got, want, maze),
        }
    }
}

#[test]
fn visit_mask_marks_each_cell_once() {
    let maze = grid(&["S.", ".E"]);
    let mut mask = VisitMask::new(&maze);
    let pos = Position::new(1, 0);
    assert!(!mask.is_visited(&pos));
    assert!(mask.mark_visited(&pos));
    assert!(!mask.mark_visited(&pos));
    assert!(mask.is_visited(&pos));
    assert!(!mask.mark_visited(&Position::new(0, 7)));
    assert!(!mask.mark_visited(&Position::new(2, 0)));
    assert!(!mask.mark_visited(&Position::new(usize::MAX, 0)));
    assert!(!mask.mark_visited(&Position::new(usize::MAX, usize::MAX)));
    assert!(!mask.is_visited(&Position::new(usize::MAX, 1)));
    assert_eq!(mask.visited_n(), 1);
}

#[test]
fn direction_table_is_fixed() {
    assert_eq!(
        Direction::all_dirs(),
        &[
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right
        ]
    );
    for dir in Direction::all_dirs() {
        let (dr, dc) = dir.offset();
        let (rr, rc) = dir.reverse().offset();
        assert_eq!((dr + rr, dc + rc), (0, 0));
    }
    assert_eq!(Direction::Left.to_string(), "LEFT");
}
