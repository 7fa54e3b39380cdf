//! A minimal invertible parse/print driver for `invertible_syntax_core`
//! integration tests.
//!
//! Grammars are trees of boxed [`Syntax`] and [`Reduce`] nodes. Parsing runs
//! initializers, folds and mappings forward over a [`Stream`]; printing runs
//! their inverses and concatenates the text each node contributes.

#![allow(unreachable_pub)]
#![allow(dead_code)]

use invertible_syntax_core::{Context, Fold, Initializer, Mapping, Span};

// ─── Input stream ────────────────────────────────────────────────────────────

/// Input text with the current position and the start of the construct
/// being reduced.
pub struct Stream<'a> {
    text: &'a str,
    pos: usize,
    mark: usize,
}

impl<'a> Stream<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            pos: 0,
            mark: 0,
        }
    }

    fn eat(&mut self, lit: &str) -> bool {
        if self.text[self.pos..].starts_with(lit) {
            self.pos += lit.len();
            true
        } else {
            false
        }
    }
}

impl Context for Stream<'_> {
    fn span(&self) -> Span {
        Span::new(self.mark.min(self.pos), self.pos)
    }
}

// ─── Node contracts ──────────────────────────────────────────────────────────

/// Produces a `T` from nothing.
pub trait Syntax<T> {
    fn parse(&self, s: &mut Stream<'_>) -> Option<T>;
    fn print(&self, value: &T) -> Option<String>;
}

/// Turns an `L` produced to its left into an `R`.
///
/// Printing returns the `L` and the text this node contributed.
pub trait Reduce<L, R> {
    fn parse(&self, s: &mut Stream<'_>, left: L) -> Option<R>;
    fn print(&self, value: &R) -> Option<(L, String)>;
}

pub type P<T> = Box<dyn Syntax<T>>;
pub type Q<L, R> = Box<dyn Reduce<L, R>>;

/// Parse `text` completely.
pub fn parse_all<T>(syntax: &dyn Syntax<T>, text: &str) -> Option<T> {
    let mut s = Stream::new(text);
    let value = syntax.parse(&mut s)?;
    (s.pos == text.len()).then_some(value)
}

// ─── Syntax nodes ────────────────────────────────────────────────────────────

struct Word;

impl Syntax<String> for Word {
    fn parse(&self, s: &mut Stream<'_>) -> Option<String> {
        let rest = &s.text[s.pos..];
        let len = rest
            .find(|c: char| !c.is_ascii_lowercase())
            .unwrap_or(rest.len());
        if len == 0 {
            return None;
        }
        s.pos += len;
        Some(rest[..len].to_string())
    }

    fn print(&self, value: &String) -> Option<String> {
        (!value.is_empty() && value.chars().all(|c| c.is_ascii_lowercase()))
            .then(|| value.clone())
    }
}

/// One or more lowercase ASCII letters.
pub fn word() -> P<String> {
    Box::new(Word)
}

struct Init<I>(I);

impl<T, I: Initializer<T>> Syntax<T> for Init<I> {
    fn parse(&self, s: &mut Stream<'_>) -> Option<T> {
        Some(self.0.supply(&Span::empty(s.pos)))
    }

    fn print(&self, value: &T) -> Option<String> {
        self.0.recognizes_as_empty(value).then(String::new)
    }
}

/// Consume nothing and start from the initializer's value.
pub fn init<T: 'static>(initializer: impl Initializer<T> + 'static) -> P<T> {
    Box::new(Init(initializer))
}

struct Prefixed<T> {
    lit: &'static str,
    inner: P<T>,
}

impl<T> Syntax<T> for Prefixed<T> {
    fn parse(&self, s: &mut Stream<'_>) -> Option<T> {
        let save = s.pos;
        if !s.eat(self.lit) {
            return None;
        }
        let value = self.inner.parse(s);
        if value.is_none() {
            s.pos = save;
        }
        value
    }

    fn print(&self, value: &T) -> Option<String> {
        Some(format!("{}{}", self.lit, self.inner.print(value)?))
    }
}

/// `lit` followed by `inner`.
pub fn prefixed<T: 'static>(lit: &'static str, inner: P<T>) -> P<T> {
    Box::new(Prefixed { lit, inner })
}

struct Then<L, R> {
    head: P<L>,
    tail: Q<L, R>,
}

impl<L, R> Syntax<R> for Then<L, R> {
    fn parse(&self, s: &mut Stream<'_>) -> Option<R> {
        let start = s.pos;
        let outer = s.mark;
        s.mark = start;
        let result = match self.head.parse(s) {
            Some(left) => {
                s.mark = start;
                self.tail.parse(s, left)
            }
            None => None,
        };
        s.mark = outer;
        if result.is_none() {
            s.pos = start;
        }
        result
    }

    fn print(&self, value: &R) -> Option<String> {
        let (left, tail) = self.tail.print(value)?;
        let head = self.head.print(&left)?;
        Some(head + &tail)
    }
}

/// `head`, then `tail` reducing its value. Reductions see the span from the
/// start of `head`.
pub fn then<L: 'static, R: 'static>(head: P<L>, tail: Q<L, R>) -> P<R> {
    Box::new(Then { head, tail })
}

// ─── Reduce nodes ────────────────────────────────────────────────────────────

struct Apply<M>(M);

impl<L, R, M: Mapping<L, R>> Reduce<L, R> for Apply<M> {
    fn parse(&self, s: &mut Stream<'_>, left: L) -> Option<R> {
        self.0.forward(&*s, left).ok()
    }

    fn print(&self, value: &R) -> Option<(L, String)> {
        self.0.backward(value).map(|left| (left, String::new()))
    }
}

/// Run `mapping` without consuming input.
pub fn apply<L: 'static, R: 'static>(mapping: impl Mapping<L, R> + 'static) -> Q<L, R> {
    Box::new(Apply(mapping))
}

struct Put<E, F> {
    elem: P<E>,
    fold: F,
}

impl<L, E, R, F: Fold<L, E, R>> Reduce<L, R> for Put<E, F> {
    fn parse(&self, s: &mut Stream<'_>, left: L) -> Option<R> {
        let elem = self.elem.parse(s)?;
        Some(self.fold.forward(&*s, left, elem))
    }

    fn print(&self, value: &R) -> Option<(L, String)> {
        let elem = self.fold.right_inverse(value)?;
        let left = self.fold.left_inverse(value)?;
        Some((left, self.elem.print(&elem)?))
    }
}

/// Parse one element and fold it into the accumulator.
pub fn put<L: 'static, E: 'static, R: 'static>(
    elem: P<E>,
    fold: impl Fold<L, E, R> + 'static,
) -> Q<L, R> {
    Box::new(Put { elem, fold })
}

struct PrefixedReduce<L, R> {
    lit: &'static str,
    inner: Q<L, R>,
}

impl<L, R> Reduce<L, R> for PrefixedReduce<L, R> {
    fn parse(&self, s: &mut Stream<'_>, left: L) -> Option<R> {
        let save = s.pos;
        if !s.eat(self.lit) {
            return None;
        }
        let value = self.inner.parse(s, left);
        if value.is_none() {
            s.pos = save;
        }
        value
    }

    fn print(&self, value: &R) -> Option<(L, String)> {
        let (left, text) = self.inner.print(value)?;
        Some((left, format!("{}{}", self.lit, text)))
    }
}

/// `lit` followed by the reduction `inner`.
pub fn prefixed_reduce<L: 'static, R: 'static>(lit: &'static str, inner: Q<L, R>) -> Q<L, R> {
    Box::new(PrefixedReduce { lit, inner })
}

struct Chain<L, M, R> {
    first: Q<L, M>,
    second: Q<M, R>,
}

impl<L, M, R> Reduce<L, R> for Chain<L, M, R> {
    fn parse(&self, s: &mut Stream<'_>, left: L) -> Option<R> {
        let save = s.pos;
        let value = self
            .first
            .parse(s, left)
            .and_then(|middle| self.second.parse(s, middle));
        if value.is_none() {
            s.pos = save;
        }
        value
    }

    fn print(&self, value: &R) -> Option<(L, String)> {
        let (middle, second) = self.second.print(value)?;
        let (left, first) = self.first.print(&middle)?;
        Some((left, first + &second))
    }
}

/// `first`, then `second`.
pub fn chain<L: 'static, M: 'static, R: 'static>(first: Q<L, M>, second: Q<M, R>) -> Q<L, R> {
    Box::new(Chain { first, second })
}

struct Choice<L, R> {
    first: Q<L, R>,
    second: Q<L, R>,
    swap_on_print: bool,
}

impl<L: Clone, R> Reduce<L, R> for Choice<L, R> {
    fn parse(&self, s: &mut Stream<'_>, left: L) -> Option<R> {
        let save = s.pos;
        if let Some(value) = self.first.parse(s, left.clone()) {
            return Some(value);
        }
        s.pos = save;
        let value = self.second.parse(s, left);
        if value.is_none() {
            s.pos = save;
        }
        value
    }

    fn print(&self, value: &R) -> Option<(L, String)> {
        let (a, b) = if self.swap_on_print {
            (&self.second, &self.first)
        } else {
            (&self.first, &self.second)
        };
        a.print(value).or_else(|| b.print(value))
    }
}

/// `first` or else `second`, in that order both ways.
pub fn choice<L: Clone + 'static, R: 'static>(first: Q<L, R>, second: Q<L, R>) -> Q<L, R> {
    Box::new(Choice {
        first,
        second,
        swap_on_print: false,
    })
}

/// `first` or else `second` when parsing; `second` is tried first when
/// printing.
pub fn choice_swapped<L: Clone + 'static, R: 'static>(
    first: Q<L, R>,
    second: Q<L, R>,
) -> Q<L, R> {
    Box::new(Choice {
        first,
        second,
        swap_on_print: true,
    })
}

struct Optional<L>(Q<L, L>);

impl<L: Clone> Reduce<L, L> for Optional<L> {
    fn parse(&self, s: &mut Stream<'_>, left: L) -> Option<L> {
        let save = s.pos;
        match self.0.parse(s, left.clone()) {
            Some(value) => Some(value),
            None => {
                s.pos = save;
                Some(left)
            }
        }
    }

    fn print(&self, value: &L) -> Option<(L, String)> {
        self.0
            .print(value)
            .or_else(|| Some((value.clone(), String::new())))
    }
}

/// `inner` if it applies, else the value unchanged.
pub fn optional<L: Clone + 'static>(inner: Q<L, L>) -> Q<L, L> {
    Box::new(Optional(inner))
}

struct Join<L> {
    sep: &'static str,
    item: Q<L, L>,
}

impl<L: Clone> Reduce<L, L> for Join<L> {
    fn parse(&self, s: &mut Stream<'_>, left: L) -> Option<L> {
        let mut acc = left;
        let mut first = true;
        loop {
            let save = s.pos;
            if !first && !s.eat(self.sep) {
                break;
            }
            match self.item.parse(s, acc.clone()) {
                Some(next) => acc = next,
                None => {
                    s.pos = save;
                    break;
                }
            }
            if s.pos == save {
                break;
            }
            first = false;
        }
        Some(acc)
    }

    fn print(&self, value: &L) -> Option<(L, String)> {
        let mut current = value.clone();
        let mut parts = Vec::new();
        while let Some((prev, text)) = self.item.print(&current) {
            parts.push(text);
            current = prev;
        }
        parts.reverse();
        Some((current, parts.join(self.sep)))
    }
}

/// Zero or more `item`s separated by `sep`.
pub fn join<L: Clone + 'static>(sep: &'static str, item: Q<L, L>) -> Q<L, L> {
    Box::new(Join { sep, item })
}

// ─── Round-trip helpers ──────────────────────────────────────────────────────

/// Print `value`, panicking with context if the grammar refuses.
pub fn print_or_panic<T: std::fmt::Debug>(syntax: &dyn Syntax<T>, value: &T) -> String {
    syntax
        .print(value)
        .unwrap_or_else(|| panic!("grammar refused to print {value:?}"))
}
