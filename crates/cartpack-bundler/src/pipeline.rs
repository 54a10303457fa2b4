//! Processing pipeline and minimizer references per asset class.
//!
//! These are opaque to cartpack: they name the loaders and minimizers the
//! bundling engine should apply, with the options it should pass them.

use cartpack_config::AssetClass;
use serde::Serialize;
use serde_json::{Value, json};

/// Module rules for one descriptor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessingPipeline {
    pub rules: Vec<Rule>,
}

/// Loaders applied, last to first, to files whose name matches `test`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rule {
    pub test: String,
    #[serde(rename = "use")]
    pub loaders: Vec<Loader>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Loader {
    pub loader: String,
    #[serde(skip_serializing_if = "Value::is_null")]
    pub options: Value,
}

impl Loader {
    pub fn new(loader: impl Into<String>) -> Self {
        Self {
            loader: loader.into(),
            options: Value::Null,
        }
    }

    pub fn with_options(mut self, options: Value) -> Self {
        self.options = options;
        self
    }
}

impl ProcessingPipeline {
    pub fn for_class(class: AssetClass) -> Self {
        match class {
            AssetClass::Script => Self::script(),
            AssetClass::Style => Self::style(),
        }
    }

    fn script() -> Self {
        Self {
            rules: vec![Rule {
                test: r"\.(js|jsx)$".to_string(),
                loaders: vec![Loader::new("babel-loader").with_options(json!({
                    "compact": false,
                    "babelrc": false,
                    "cacheDirectory": true,
                    "presets": ["@babel/preset-env"],
                    "plugins": ["@babel/plugin-proposal-object-rest-spread"]
                }))],
            }],
        }
    }

    fn style() -> Self {
        let css_chain = || {
            vec![
                Loader::new("mini-css-extract-plugin/loader"),
                Loader::new("css-loader").with_options(json!({ "url": false })),
                Loader::new("postcss-loader").with_options(json!({
                    "postcssOptions": { "plugins": ["autoprefixer"] }
                })),
            ]
        };

        let mut sass_chain = css_chain();
        sass_chain.push(Loader::new("sass-loader"));

        Self {
            rules: vec![
                Rule {
                    test: r"\.s[ac]ss$".to_string(),
                    loaders: sass_chain,
                },
                Rule {
                    test: r"\.css$".to_string(),
                    loaders: css_chain(),
                },
            ],
        }
    }
}

/// Minimizer reference for one descriptor.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "minimizer", rename_all = "kebab-case")]
pub enum Minimizer {
    Terser,
    #[serde(rename_all = "camelCase")]
    CssMinimizer { minimizer_options: Value },
}

impl Minimizer {
    pub fn for_class(class: AssetClass) -> Self {
        match class {
            AssetClass::Script => Minimizer::Terser,
            AssetClass::Style => Minimizer::CssMinimizer {
                minimizer_options: json!({
                    "preset": ["default", { "discardComments": { "removeAll": true } }]
                }),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Optimization {
    pub minimize: bool,
    pub minimizer: Vec<Minimizer>,
}
