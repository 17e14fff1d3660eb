//! pith: lexical passage selection
//!
//! Large documents rarely fit in a prompt. pith splits a document into paragraphs, scores each
//! one against a query by TF-IDF cosine similarity, and keeps the best paragraphs that fit a
//! character budget. The selected text is printed so it can be piped into whatever builds the
//! prompt.

#![warn(missing_docs)]

pub mod cli;
