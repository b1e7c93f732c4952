use pretty_assertions::assert_eq;

use rsubset::object::*;
use rsubset::repl::eval;
use rsubset::{r, r_expect};

#[test]
fn atomic_vectors() {
    r_expect! {{r#"
        x <- c(2.1, 4.2, 3.3, 5.4)
        identical(x[c(3, 1)], c(3.3, 2.1)) &&
          identical(x[-c(3, 1)], c(4.2, 5.4)) &&
          identical(x[x > 3], c(4.2, 3.3, 5.4)) &&
          identical(x[0], numeric(0))
    "#}}

    r_expect! {{r#"
        y <- c(a = 2.1, b = 4.2, c = 3.3)
        identical(y[c("a", "a", "c")], c(a = 2.1, a = 2.1, c = 3.3))
    "#}}
}

#[test]
fn mixing_signs_is_an_error() {
    assert!(eval("c(2.1, 4.2)[c(-1, 2)]").is_err());
}

#[test]
fn lists_preserve_and_simplify() {
    r_expect! {{r#"
        l <- list(a = 1, b = "two", c = c(3, 4))
        typeof(l[1]) == "list" && identical(l[[1]], 1) && identical(l$c, c(3, 4))
    "#}}

    // out of bounds positions on lists are NULL rather than an error
    assert_eq!(r!("list(a = 1)[[2]]"), Obj::Null);
    assert!(eval("c(a = 1)[[2]]").is_err());
}

#[test]
fn matrices() {
    r_expect! {{r#"
        a <- matrix(1:9, nrow = 3)
        colnames(a) <- c("A", "B", "C")
        identical(a[1:2, "B"], c(4L, 5L)) &&
          identical(dim(a[1:2, ]), c(2L, 3L)) &&
          identical(a[c(TRUE, FALSE, TRUE), c("B", "A")][1, ], c(B = 4L, A = 1L)) &&
          identical(dim(a[0, -2]), c(0L, 2L))
    "#}}
}

#[test]
fn drop_and_preserve() {
    r_expect! {{r#"
        a <- matrix(1:4, nrow = 2)
        identical(dim(a[1, , drop = FALSE]), c(1L, 2L)) && is.null(dim(a[1, ]))
    "#}}
}

#[test]
fn data_frames() {
    r_expect! {{r#"
        df <- data.frame(x = 1:3, y = 3:1, z = c("a", "b", "c"))
        identical(df[df$x == 2, "z"], "b") &&
          identical(names(df[c("x", "z")]), c("x", "z")) &&
          identical(df[, "x"], 1:3) &&
          identical(ncol(df[, "x", drop = FALSE]), 1L)
    "#}}
}

#[test]
fn lookup_tables() {
    r_expect! {{r#"
        x <- c("m", "f", "u", "f", "f", "m", "m")
        lookup <- c(m = "Male", f = "Female", u = NA)
        identical(unname(lookup[x]), c("Male", "Female", NA, "Female", "Female", "Male", "Male"))
    "#}}
}

#[test]
fn subassignment() {
    r_expect! {{r#"
        x <- 1:5
        x[c(1, 2)] <- c(101, 102)
        x[-1] <- 4:1
        identical(x, c(101, 4, 3, 2, 1))
    "#}}

    r_expect! {{r#"
        x <- list(a = 1, b = 2)
        x[["b"]] <- NULL
        x["c"] <- list(NULL)
        identical(names(x), c("a", "c")) && is.null(x$c)
    "#}}
}

#[test]
fn whole_object_assignment_keeps_structure() {
    r_expect! {{r#"
        df <- data.frame(a = c(1, 10, NA))
        df[] <- 0
        identical(df$a, c(0, 0, 0))
    "#}}
}

#[test]
fn boolean_algebra() {
    r_expect! {{r#"
        x <- sample(10) < 4
        length(which(x)) == 3 && all(which(x) %in% 1:10) && all(x[which(x)])
    "#}}
}

#[test]
fn ordering_and_sampling() {
    r_expect! {{r#"
        x <- c("b", "c", "a")
        identical(x[order(x)], c("a", "b", "c")) &&
          identical(x[order(x, decreasing = TRUE)], c("c", "b", "a"))
    "#}}

    r_expect! {{r#"
        set.seed(10)
        df <- data.frame(x = c(1, 2, 3, 1, 2), y = 5:1)
        shuffled <- df[sample(nrow(df)), ]
        identical(nrow(shuffled), 5L) && all(shuffled$y %in% 1:5)
    "#}}
}
