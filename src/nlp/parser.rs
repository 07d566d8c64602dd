//! Deterministic shallow dependency parser.
//!
//! Verbal groups (auxiliary chain plus main verb) are found first and given
//! clause roles from the connective that introduces them; noun chunks are then
//! attached as subjects, objects, prepositional objects or conjuncts.

use std::collections::{HashMap, HashSet};
use std::ops::Range;

use super::lexicon::{LexClass, Lexicon, VerbForm, lexicon};
use super::tagger::{self, TaggedToken, is_sentence_terminator};
use super::{DepLabel, ParseError, ParsedSentence, Pos, SentenceParser, Token};

pub const DEFAULT_MAX_TOKENS: usize = 512;

#[derive(Debug, Clone, Copy)]
pub struct ShallowParser {
    max_tokens: usize,
}

impl Default for ShallowParser {
    fn default() -> Self {
        Self::with_max_tokens(DEFAULT_MAX_TOKENS)
    }
}

impl ShallowParser {
    pub fn with_max_tokens(max_tokens: usize) -> Self {
        Self { max_tokens }
    }

    pub fn max_tokens(&self) -> usize {
        self.max_tokens
    }
}

impl SentenceParser for ShallowParser {
    fn parse(&self, text: &str) -> Result<ParsedSentence, ParseError> {
        if text.trim().is_empty() {
            return Err(ParseError::Empty);
        }

        let lexicon = lexicon();
        let mut tokens = tagger::tokenize(text, lexicon);
        if tokens.len() > self.max_tokens {
            return Err(ParseError::TooLong {
                tokens: tokens.len(),
                limit: self.max_tokens,
            });
        }
        if !tokens
            .iter()
            .any(|token| token.text.chars().any(char::is_alphanumeric))
        {
            return Err(ParseError::NoWords);
        }

        tagger::tag(&mut tokens, lexicon);

        let mut arcs = vec![Attachment::default(); tokens.len()];
        for range in sentence_ranges(&tokens, lexicon) {
            SentenceAttacher::new(&tokens, range, lexicon).attach(&mut arcs);
        }

        let parsed = tokens
            .into_iter()
            .zip(arcs)
            .enumerate()
            .map(|(index, (token, arc))| Token {
                index,
                text: token.text,
                pos: token.pos,
                dep: arc.dep,
                head: arc.head.unwrap_or(index),
                offset: token.offset,
            })
            .collect();

        Ok(ParsedSentence::new(parsed))
    }
}

#[derive(Debug, Clone, Copy)]
struct Attachment {
    dep: DepLabel,
    head: Option<usize>,
}

impl Default for Attachment {
    fn default() -> Self {
        Self {
            dep: DepLabel::Dep,
            head: None,
        }
    }
}

/// Splits on `.`, `!`, `?` and `;` when more words follow.
fn sentence_ranges(tokens: &[TaggedToken], lexicon: &Lexicon) -> Vec<Range<usize>> {
    let mut ranges = Vec::new();
    let mut start = 0;

    for (index, token) in tokens.iter().enumerate() {
        if !is_sentence_terminator(&token.text) {
            continue;
        }
        let after_abbreviation = token.text == "."
            && index
                .checked_sub(1)
                .is_some_and(|before| lexicon.is_abbreviation(&tokens[before].lower));
        let has_words = tokens[start..index]
            .iter()
            .any(|earlier| earlier.text.chars().any(char::is_alphanumeric));
        let more_words = tokens[index + 1..]
            .iter()
            .any(|later| !matches!(later.pos, Pos::Punct | Pos::Sym));
        if has_words && more_words && !after_abbreviation {
            ranges.push(start..index + 1);
            start = index + 1;
        }
    }

    if start < tokens.len() {
        ranges.push(start..tokens.len());
    }
    ranges
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Connective {
    Coordinator(usize),
    Subordinator(usize),
    Infinitive(usize),
    Relative(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Role {
    Root,
    Attached(DepLabel, usize),
    Pending(DepLabel),
}

#[derive(Debug, Clone)]
struct Group {
    start: usize,
    end: usize,
    head: usize,
    passive: bool,
    role: Role,
    /// Head of the first conjunct in a coordination chain.
    chain_first: usize,
    subject_from: usize,
}

#[derive(Debug, Clone)]
struct Chunk {
    start: usize,
    end: usize,
    head: usize,
}

struct SentenceAttacher<'a> {
    tokens: &'a [TaggedToken],
    range: Range<usize>,
    lexicon: &'a Lexicon,
    assigned: Vec<bool>,
}

impl<'a> SentenceAttacher<'a> {
    fn new(tokens: &'a [TaggedToken], range: Range<usize>, lexicon: &'a Lexicon) -> Self {
        Self {
            tokens,
            range,
            lexicon,
            assigned: vec![false; tokens.len()],
        }
    }

    fn set(&mut self, arcs: &mut [Attachment], index: usize, dep: DepLabel, head: usize) {
        arcs[index] = Attachment {
            dep,
            head: Some(head),
        };
        self.assigned[index] = true;
    }

    fn attach(mut self, arcs: &mut [Attachment]) {
        let mut groups = self.verbal_groups(arcs);
        self.assign_roles(&mut groups, arcs);

        let chunks = self.chunks();
        let mut chunk_of = HashMap::new();
        for (position, chunk) in chunks.iter().enumerate() {
            for index in chunk.start..chunk.end {
                chunk_of.insert(index, position);
            }
        }
        for chunk in &chunks {
            self.label_chunk_internals(chunk, arcs);
        }

        let mut chunk_done = vec![false; chunks.len()];
        self.assign_subjects(&groups, &chunks, &mut chunk_done, arcs);

        let root = groups
            .iter()
            .find(|group| group.role == Role::Root)
            .map(|group| group.head);
        let root = self.attach_chunks(&groups, &chunks, &chunk_of, &mut chunk_done, root, arcs);
        self.attach_rest(&groups, &chunks, &chunk_of, root, arcs);
    }

    /// Auxiliary chains ending in a main verb, or a bare auxiliary (copula).
    fn verbal_groups(&mut self, arcs: &mut [Attachment]) -> Vec<Group> {
        let tokens = self.tokens;
        let end = self.range.end;
        let mut groups = Vec::new();
        let mut index = self.range.start;

        while index < end {
            if !matches!(tokens[index].pos, Pos::Verb | Pos::Aux) || self.assigned[index] {
                index += 1;
                continue;
            }

            let start = index;
            let mut members = Vec::new();
            let mut inner = Vec::new();
            let mut cursor = index;
            loop {
                members.push(cursor);
                if tokens[cursor].pos == Pos::Verb {
                    cursor += 1;
                    break;
                }
                let mut lookahead = cursor + 1;
                while lookahead < end
                    && matches!(tokens[lookahead].class, LexClass::Adv | LexClass::Neg)
                {
                    lookahead += 1;
                }
                if lookahead < end && matches!(tokens[lookahead].pos, Pos::Verb | Pos::Aux) {
                    inner.extend(cursor + 1..lookahead);
                    cursor = lookahead;
                } else {
                    cursor += 1;
                    break;
                }
            }

            let head = members
                .iter()
                .rev()
                .find(|member| tokens[**member].pos == Pos::Verb)
                .or_else(|| members.last())
                .copied()
                .unwrap_or(start);
            let last_auxiliary = members.iter().copied().filter(|member| *member < head).last();
            let participle_head = tokens[head].pos == Pos::Verb
                && matches!(
                    tokens[head].form,
                    Some(VerbForm::Participle | VerbForm::PastOrParticiple)
                );

            let mut passive = false;
            for member in members.iter().copied().filter(|member| *member != head) {
                let is_passive_marker = participle_head
                    && tokens[member].class == LexClass::Be
                    && Some(member) == last_auxiliary;
                passive |= is_passive_marker;
                let dep = if is_passive_marker {
                    DepLabel::AuxPass
                } else {
                    DepLabel::Aux
                };
                self.set(arcs, member, dep, head);
            }
            for modifier in inner {
                let dep = if tokens[modifier].class == LexClass::Neg {
                    DepLabel::Neg
                } else {
                    DepLabel::Advmod
                };
                self.set(arcs, modifier, dep, head);
            }
            self.assigned[head] = true;

            groups.push(Group {
                start,
                end: cursor,
                head,
                passive,
                role: Role::Root,
                chain_first: head,
                subject_from: start,
            });
            index = cursor;
        }

        groups
    }

    fn assign_roles(&mut self, groups: &mut [Group], arcs: &mut [Attachment]) {
        let tokens = self.tokens;
        let mut segment_start = self.range.start;
        let mut root: Option<usize> = None;
        let mut pending: Vec<usize> = Vec::new();

        for position in 0..groups.len() {
            let (start, head) = (groups[position].start, groups[position].head);
            let previous = position.checked_sub(1).map(|before| groups[before].clone());
            let segment = segment_start..start;
            let connective = self.find_connective(segment.clone(), start, previous.is_some());
            let mut subject_from = segment.start;

            let role = match connective {
                Some(Connective::Infinitive(marker)) => {
                    self.set(arcs, marker, DepLabel::Aux, head);
                    subject_from = start;
                    match &previous {
                        Some(previous) => Role::Attached(DepLabel::Xcomp, previous.head),
                        None => Role::Root,
                    }
                }
                Some(Connective::Relative(pronoun)) => {
                    let dep = if groups[position].passive {
                        DepLabel::NsubjPass
                    } else {
                        DepLabel::Nsubj
                    };
                    self.set(arcs, pronoun, dep, head);
                    subject_from = start;
                    let noun = pronoun.saturating_sub(1);
                    Role::Attached(DepLabel::Relcl, noun)
                }
                Some(Connective::Coordinator(conjunction)) => {
                    // only reached with a previous group
                    let first = previous.as_ref().map(|group| group.chain_first).unwrap_or(head);
                    self.set(arcs, conjunction, DepLabel::Cc, first);
                    subject_from = conjunction + 1;
                    groups[position].chain_first = first;
                    Role::Attached(DepLabel::Conj, first)
                }
                Some(Connective::Subordinator(marker)) => {
                    self.set(arcs, marker, DepLabel::Mark, head);
                    subject_from = marker + 1;
                    let label = if self.lexicon.is_complementizer(&tokens[marker].lower) {
                        DepLabel::Ccomp
                    } else {
                        DepLabel::Advcl
                    };
                    match (&previous, root) {
                        (Some(previous), Some(_)) => Role::Attached(label, previous.head),
                        _ => Role::Pending(label),
                    }
                }
                None => {
                    let comma = segment
                        .clone()
                        .rev()
                        .find(|index| tokens[*index].text == ",");
                    if let Some(comma) = comma {
                        subject_from = comma + 1;
                    }
                    self.unmarked_role(groups, position, previous.as_ref(), root, comma, subject_from)
                }
            };

            groups[position].role = role;
            groups[position].subject_from = subject_from;

            match role {
                Role::Root => {
                    root = Some(head);
                    for waiting in pending.drain(..) {
                        if let Role::Pending(label) = groups[waiting].role {
                            groups[waiting].role = Role::Attached(label, head);
                        }
                    }
                }
                Role::Pending(_) => pending.push(position),
                Role::Attached(_, _) => {}
            }

            // a reduced relative leaves the subject search window open
            if !matches!(role, Role::Attached(DepLabel::Acl, _)) {
                segment_start = groups[position].end;
            }
        }

        if let Some((&first, rest)) = pending.split_first() {
            if root.is_none() {
                groups[first].role = Role::Root;
                let head = groups[first].head;
                for waiting in rest {
                    if let Role::Pending(label) = groups[*waiting].role {
                        groups[*waiting].role = Role::Attached(label, head);
                    }
                }
            }
        }

        for group in groups.iter() {
            match group.role {
                Role::Root => self.set(arcs, group.head, DepLabel::Root, group.head),
                Role::Attached(label, head) => self.set(arcs, group.head, label, head),
                Role::Pending(label) => self.set(arcs, group.head, label, group.head),
            }
        }
    }

    fn unmarked_role(
        &self,
        groups: &[Group],
        position: usize,
        previous: Option<&Group>,
        root: Option<usize>,
        comma: Option<usize>,
        subject_from: usize,
    ) -> Role {
        let tokens = self.tokens;
        let group = &groups[position];

        if self.is_reduced_relative(groups, position) {
            return Role::Attached(DepLabel::Acl, group.start - 1);
        }
        let Some(previous) = previous else {
            return Role::Root;
        };
        if root.is_none() {
            return Role::Root;
        }
        if previous.end == group.start {
            return Role::Attached(DepLabel::Xcomp, previous.head);
        }

        let has_subject = (subject_from..group.start).any(|index| {
            matches!(tokens[index].pos, Pos::Noun | Pos::Propn | Pos::Pron)
                && !self.assigned[index]
        });
        match (comma, has_subject) {
            (Some(_), true) => Role::Root,
            (Some(_), false) => Role::Attached(DepLabel::Conj, previous.chain_first),
            (None, _) => {
                let before = group.start - 1;
                if matches!(tokens[before].pos, Pos::Noun | Pos::Propn) {
                    Role::Attached(DepLabel::Relcl, before)
                } else {
                    Role::Attached(DepLabel::Dep, previous.head)
                }
            }
        }
    }

    /// `data received from the sensor shall be stored`: a bare past form right
    /// after a noun, with a finite verb group later in the sentence.
    fn is_reduced_relative(&self, groups: &[Group], position: usize) -> bool {
        let tokens = self.tokens;
        let group = &groups[position];
        if group.start <= self.range.start || group.end - group.start != 1 {
            return false;
        }
        let verb = &tokens[group.head];
        let past = verb.pos == Pos::Verb
            && matches!(
                verb.form,
                Some(VerbForm::PastOrParticiple | VerbForm::Participle)
            );
        let after_noun = matches!(tokens[group.start - 1].pos, Pos::Noun | Pos::Propn);
        let finite_later = groups[position + 1..]
            .iter()
            .any(|later| (later.start..later.end).any(|index| tokens[index].pos == Pos::Aux));
        past && after_noun && finite_later
    }

    fn find_connective(
        &self,
        segment: Range<usize>,
        group_start: usize,
        has_previous: bool,
    ) -> Option<Connective> {
        let tokens = self.tokens;

        let before = (segment.start..group_start)
            .rev()
            .find(|index| !matches!(tokens[*index].class, LexClass::Adv | LexClass::Neg));
        if let Some(before) = before {
            let token = &tokens[before];
            if token.class == LexClass::To && token.pos == Pos::Part {
                return Some(Connective::Infinitive(before));
            }
            let after_noun = before > self.range.start
                && matches!(tokens[before - 1].pos, Pos::Noun | Pos::Propn);
            if token.pos == Pos::Pron && after_noun && self.lexicon.is_relative_pronoun(&token.lower)
            {
                return Some(Connective::Relative(before));
            }
        }

        // subordinators outrank coordinators, which outrank clause adpositions
        let first_where = |wanted: &dyn Fn(&TaggedToken) -> bool| {
            (segment.start..segment.end).find(|index| wanted(&tokens[*index]))
        };
        if let Some(marker) = first_where(&|token| token.pos == Pos::Sconj) {
            return Some(Connective::Subordinator(marker));
        }
        if has_previous {
            if let Some(conjunction) = first_where(&|token| token.pos == Pos::Cconj) {
                return Some(Connective::Coordinator(conjunction));
            }
        }
        first_where(&|token| {
            token.pos == Pos::Adp && self.lexicon.is_clause_adposition(&token.lower)
        })
        .map(Connective::Subordinator)
    }

    fn chunks(&self) -> Vec<Chunk> {
        let tokens = self.tokens;
        let end = self.range.end;
        let chunkable = |index: usize| {
            index < end
                && !self.assigned[index]
                && matches!(
                    tokens[index].pos,
                    Pos::Det | Pos::Adj | Pos::Num | Pos::Noun | Pos::Propn | Pos::Pron
                )
        };
        let joiner = |index: usize| {
            index < end && matches!(tokens[index].text.as_str(), "-" | "/" | "'")
        };

        let mut chunks = Vec::new();
        let mut index = self.range.start;
        while index < end {
            if !chunkable(index) {
                index += 1;
                continue;
            }
            if tokens[index].pos == Pos::Pron {
                chunks.push(Chunk {
                    start: index,
                    end: index + 1,
                    head: index,
                });
                index += 1;
                continue;
            }

            let start = index;
            let mut cursor = index + 1;
            loop {
                let seen_noun = (start..cursor)
                    .any(|inner| matches!(tokens[inner].pos, Pos::Noun | Pos::Propn));
                let extends = |candidate: usize| {
                    chunkable(candidate)
                        && tokens[candidate].pos != Pos::Pron
                        && !(seen_noun && tokens[candidate].pos == Pos::Det)
                };
                if extends(cursor) {
                    cursor += 1;
                } else if joiner(cursor) && extends(cursor + 1) {
                    cursor += 2;
                } else {
                    break;
                }
            }

            let span = start..cursor;
            let head = [
                &[Pos::Noun, Pos::Propn][..],
                &[Pos::Num][..],
                &[Pos::Adj][..],
            ]
            .iter()
            .find_map(|wanted| span.clone().rev().find(|inner| wanted.contains(&tokens[*inner].pos)))
            .unwrap_or(cursor - 1);

            chunks.push(Chunk {
                start,
                end: cursor,
                head,
            });
            index = cursor;
        }
        chunks
    }

    fn label_chunk_internals(&mut self, chunk: &Chunk, arcs: &mut [Attachment]) {
        for index in chunk.start..chunk.end {
            if index == chunk.head {
                continue;
            }
            let dep = match self.tokens[index].pos {
                Pos::Det => DepLabel::Det,
                Pos::Adj => DepLabel::Amod,
                Pos::Num => DepLabel::Nummod,
                Pos::Noun | Pos::Propn if index < chunk.head => DepLabel::Compound,
                Pos::Punct | Pos::Sym => DepLabel::Punct,
                _ => DepLabel::Dep,
            };
            self.set(arcs, index, dep, chunk.head);
        }
    }

    fn assign_subjects(
        &mut self,
        groups: &[Group],
        chunks: &[Chunk],
        chunk_done: &mut [bool],
        arcs: &mut [Attachment],
    ) {
        for group in groups {
            let skip = matches!(
                group.role,
                Role::Attached(DepLabel::Xcomp | DepLabel::Relcl | DepLabel::Acl, _)
            ) || self.has_dependent(arcs, group.head, &[DepLabel::Nsubj, DepLabel::NsubjPass]);
            if skip {
                continue;
            }

            let subject = chunks.iter().enumerate().find(|(position, chunk)| {
                !chunk_done[*position]
                    && chunk.start >= group.subject_from
                    && chunk.end <= group.start
                    && !self.after_adposition(chunk.start)
            });
            if let Some((position, chunk)) = subject {
                let dep = if group.passive {
                    DepLabel::NsubjPass
                } else {
                    DepLabel::Nsubj
                };
                self.set(arcs, chunk.head, dep, group.head);
                chunk_done[position] = true;
            }
        }
    }

    fn has_dependent(&self, arcs: &[Attachment], head: usize, labels: &[DepLabel]) -> bool {
        self.range
            .clone()
            .any(|index| arcs[index].head == Some(head) && labels.contains(&arcs[index].dep))
    }

    fn after_adposition(&self, index: usize) -> bool {
        index > self.range.start && self.tokens[index - 1].pos == Pos::Adp
    }

    /// Attaches the remaining chunks; returns the sentence root.
    fn attach_chunks(
        &mut self,
        groups: &[Group],
        chunks: &[Chunk],
        chunk_of: &HashMap<usize, usize>,
        chunk_done: &mut [bool],
        mut root: Option<usize>,
        arcs: &mut [Attachment],
    ) -> usize {
        let tokens = self.tokens;
        let mut chain_first: Vec<usize> = chunks.iter().map(|chunk| chunk.head).collect();
        let mut objects: HashSet<usize> = HashSet::new();

        for (position, chunk) in chunks.iter().enumerate() {
            if chunk_done[position] {
                continue;
            }
            chunk_done[position] = true;
            let before = chunk.start.checked_sub(1).filter(|index| *index >= self.range.start);

            if let Some(adposition) = before.filter(|index| tokens[*index].pos == Pos::Adp) {
                self.set(arcs, chunk.head, DepLabel::Pobj, adposition);
                continue;
            }

            if let Some(linked) = self.coordinated_chunk(chunk, before, chunk_of) {
                let first = chain_first[linked];
                chain_first[position] = first;
                if let Some(conjunction) = before.filter(|index| tokens[*index].pos == Pos::Cconj) {
                    if !self.assigned[conjunction] {
                        self.set(arcs, conjunction, DepLabel::Cc, first);
                    }
                }
                self.set(arcs, chunk.head, DepLabel::Conj, first);
                continue;
            }

            let governor = groups.iter().rev().find(|group| group.end <= chunk.start);
            if let Some(group) = governor {
                let dep = if tokens[chunk.head].pos == Pos::Adj {
                    DepLabel::Acomp
                } else if tokens[group.head].pos == Pos::Aux {
                    DepLabel::Attr
                } else if !objects.insert(group.head) {
                    DepLabel::Dep
                } else {
                    DepLabel::Dobj
                };
                self.set(arcs, chunk.head, dep, group.head);
                continue;
            }

            match root {
                None => {
                    self.set(arcs, chunk.head, DepLabel::Root, chunk.head);
                    root = Some(chunk.head);
                }
                Some(root) => self.set(arcs, chunk.head, DepLabel::Dep, root),
            }
        }

        root.or_else(|| {
            self.range
                .clone()
                .find(|index| tokens[*index].text.chars().any(char::is_alphanumeric))
        })
        .unwrap_or(self.range.start)
    }

    /// `errors and warnings`, `errors, warnings`: the earlier chunk this one coordinates with.
    fn coordinated_chunk(
        &self,
        chunk: &Chunk,
        before: Option<usize>,
        chunk_of: &HashMap<usize, usize>,
    ) -> Option<usize> {
        let tokens = self.tokens;
        let connector = before?;
        let is_link = tokens[connector].pos == Pos::Cconj || tokens[connector].text == ",";
        if !is_link || (self.assigned[connector] && tokens[connector].pos == Pos::Cconj) {
            return None;
        }
        let earlier = connector
            .checked_sub(1)
            .filter(|index| *index >= self.range.start)?;
        let linked = *chunk_of.get(&earlier)?;

        if tokens[connector].text == "," {
            let next = chunk.end;
            let continues_list = next < self.range.end
                && (tokens[next].pos == Pos::Cconj || tokens[next].text == ",");
            if !continues_list {
                return None;
            }
        }
        Some(linked)
    }

    fn attach_rest(
        &mut self,
        groups: &[Group],
        chunks: &[Chunk],
        chunk_of: &HashMap<usize, usize>,
        root: usize,
        arcs: &mut [Attachment],
    ) {
        let tokens = self.tokens;
        let previous_group = |index: usize| groups.iter().rev().find(|group| group.end <= index);
        let next_group = |index: usize| groups.iter().find(|group| group.start > index);

        for index in self.range.clone() {
            if self.assigned[index] {
                continue;
            }
            let token = &tokens[index];
            let nearest_verb = previous_group(index)
                .or_else(|| next_group(index))
                .map(|group| group.head)
                .unwrap_or(root);

            match token.pos {
                Pos::Adp => {
                    let before = index.checked_sub(1).filter(|before| *before >= self.range.start);
                    let verb_before = before.and_then(|before| {
                        groups
                            .iter()
                            .find(|group| group.start <= before && before < group.end)
                    });
                    if let Some(group) = verb_before {
                        let dep = if group.passive && token.lower == "by" {
                            DepLabel::Agent
                        } else {
                            DepLabel::Prep
                        };
                        self.set(arcs, index, dep, group.head);
                    } else if let Some(chunk) = before.and_then(|before| chunk_of.get(&before)) {
                        self.set(arcs, index, DepLabel::Prep, chunks[*chunk].head);
                    } else {
                        self.set(arcs, index, DepLabel::Prep, nearest_verb);
                    }
                }
                Pos::Cconj => {
                    let head = index
                        .checked_sub(1)
                        .filter(|before| *before >= self.range.start)
                        .and_then(|before| chunk_of.get(&before).map(|chunk| chunks[*chunk].head))
                        .unwrap_or(nearest_verb);
                    self.set(arcs, index, DepLabel::Cc, head);
                }
                Pos::Sconj => {
                    let head = next_group(index).map(|group| group.head).unwrap_or(root);
                    self.set(arcs, index, DepLabel::Mark, head);
                }
                Pos::Part if token.class == LexClass::Neg => {
                    self.set(arcs, index, DepLabel::Neg, nearest_verb);
                }
                Pos::Part => {
                    let head = next_group(index).map(|group| group.head).unwrap_or(root);
                    self.set(arcs, index, DepLabel::Aux, head);
                }
                Pos::Adv => self.set(arcs, index, DepLabel::Advmod, nearest_verb),
                Pos::Punct | Pos::Sym => self.set(arcs, index, DepLabel::Punct, root),
                _ => self.set(arcs, index, DepLabel::Dep, root),
            }
        }
    }
}
