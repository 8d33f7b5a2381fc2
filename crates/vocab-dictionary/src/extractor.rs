use scraper::{ElementRef, Html, Selector};
use url::Url;
use vocab_types::{Pronunciation, PronunciationEntry, RawEntry, RawSense};

use crate::{DictionaryError, PageExtractor};

const SOURCE_NAME: &str = "cambridge";

/// Left behind by cross-reference links in example lists
const ARROW_MARKER: char = '→';

struct Selectors {
    content: Selector,
    error: Selector,
    uk_ipa: Selector,
    us_ipa: Selector,
    uk_audio: Selector,
    us_audio: Selector,
    part_of_speech: Selector,
    level: Selector,
    def_block: Selector,
    entry: Selector,
    definition: Selector,
    example: Selector,
}

impl Selectors {
    fn new() -> Result<Self, DictionaryError> {
        Ok(Self {
            content: selector(".pr.dictionary, .entry-body, .di-title")?,
            error: selector(".no-results, .error-page, .not-found")?,
            uk_ipa: selector(".uk .pron .ipa")?,
            us_ipa: selector(".us .pron .ipa")?,
            uk_audio: selector(r#".uk .daud audio source[type="audio/mpeg"]"#)?,
            us_audio: selector(r#".us .daud audio source[type="audio/mpeg"]"#)?,
            part_of_speech: selector(".pos, .dpos")?,
            level: selector(".level, .cef-level, .level-indicator")?,
            def_block: selector(
                ".entry-body .sense-body .def-block, .entry-body .pr.dsense .def-block",
            )?,
            entry: selector(".entry, .pr.di")?,
            definition: selector(".def, .ddef_d")?,
            example: selector(".examp .eg, .dexamp .deg")?,
        })
    }
}

fn selector(css: &str) -> Result<Selector, DictionaryError> {
    Selector::parse(css).map_err(|e| DictionaryError::Selector(format!("{css}: {e:?}")))
}

/// Extractor for Cambridge Dictionary word pages
pub struct CambridgeExtractor {
    selectors: Selectors,
    origin: Url,
    max_senses: usize,
    max_examples: usize,
}

impl CambridgeExtractor {
    /// `base_url` supplies the scheme and host for relative audio links.
    pub fn new(
        base_url: &str,
        max_senses: usize,
        max_examples: usize,
    ) -> Result<Self, DictionaryError> {
        let origin = Url::parse(base_url)
            .map_err(|e| DictionaryError::InvalidUrl(format!("{base_url}: {e}")))?;

        Ok(Self {
            selectors: Selectors::new()?,
            origin,
            max_senses,
            max_examples,
        })
    }

    fn page_exists(&self, document: &Html) -> bool {
        let has_content = document.select(&self.selectors.content).next().is_some();
        let has_error = document.select(&self.selectors.error).next().is_some();
        has_content && !has_error
    }

    fn pronunciation(&self, document: &Html) -> Pronunciation {
        let uk_ipa = first_text(document.root_element(), &self.selectors.uk_ipa);
        let us_ipa = first_text(document.root_element(), &self.selectors.us_ipa);

        Pronunciation {
            us: PronunciationEntry {
                // US transcription is often missing, the UK one is close enough
                ipa: if us_ipa.is_empty() { uk_ipa.clone() } else { us_ipa },
                audio_url: self.audio_url(document, &self.selectors.us_audio),
            },
            uk: PronunciationEntry {
                ipa: uk_ipa,
                audio_url: self.audio_url(document, &self.selectors.uk_audio),
            },
        }
    }

    fn audio_url(&self, document: &Html, source: &Selector) -> String {
        let src = document
            .select(source)
            .next()
            .and_then(|el| el.value().attr("src"))
            .unwrap_or_default();

        self.absolute_url(src)
    }

    fn absolute_url(&self, src: &str) -> String {
        if src.is_empty() || src.starts_with("http") {
            return src.to_string();
        }

        match self.origin.join(src) {
            Ok(url) => url.to_string(),
            Err(e) => {
                tracing::debug!("Keeping unresolvable audio url {src}: {e}");
                src.to_string()
            }
        }
    }

    fn senses(&self, document: &Html) -> Vec<RawSense> {
        let mut senses = Vec::new();

        for block in document
            .select(&self.selectors.def_block)
            .take(self.max_senses)
        {
            let definition = block
                .select(&self.selectors.definition)
                .map(|el| el.text().collect::<String>())
                .collect::<String>()
                .trim()
                .to_string();

            if definition.is_empty() {
                tracing::debug!("Skipping definition block without text");
                continue;
            }

            let grammar = self
                .owning_entry(block)
                .map(|entry| first_text(entry, &self.selectors.part_of_speech))
                .unwrap_or_default();

            let examples = block
                .select(&self.selectors.example)
                .take(self.max_examples)
                .map(|el| collapse_whitespace(&el.text().collect::<String>()))
                .filter(|text| !text.is_empty() && !text.contains(ARROW_MARKER))
                .collect();

            senses.push(RawSense {
                id: format!("{}-{}", SOURCE_NAME, senses.len()),
                grammar,
                definition,
                examples,
            });
        }

        senses
    }

    /// Nearest enclosing entry, the block itself included
    fn owning_entry<'a>(&self, block: ElementRef<'a>) -> Option<ElementRef<'a>> {
        std::iter::once(block)
            .chain(block.ancestors().filter_map(ElementRef::wrap))
            .find(|el| self.selectors.entry.matches(el))
    }
}

impl PageExtractor for CambridgeExtractor {
    fn source_name(&self) -> &str {
        SOURCE_NAME
    }

    fn extract(&self, word: &str, html: &str) -> Result<RawEntry, DictionaryError> {
        let document = Html::parse_document(html);

        if !self.page_exists(&document) {
            return Err(DictionaryError::NotFound {
                word: word.to_string(),
            });
        }

        let level = first_text(document.root_element(), &self.selectors.level);

        let entry = RawEntry {
            pronunciation: self.pronunciation(&document),
            part_of_speech: first_text(document.root_element(), &self.selectors.part_of_speech),
            level: if level.is_empty() { None } else { Some(level) },
            senses: self.senses(&document),
        };

        tracing::debug!("Extracted {} senses for {word}", entry.senses.len());

        Ok(entry)
    }
}

/// Trimmed text of the first match, empty when nothing matches
fn first_text(scope: ElementRef<'_>, selector: &Selector) -> String {
    scope
        .select(selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .unwrap_or_default()
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
