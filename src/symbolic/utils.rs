// the collection of utility functions mainly for bracket parsing and proceeding
// all positions are byte offsets into the input, so slicing stays on char boundaries

/// true if every '(' has its pair and no ')' comes before its '('
pub fn brackets_are_balanced(s: &str) -> bool {
    let mut depth: usize = 0;
    for c in s.chars() {
        match c {
            '(' => depth += 1,
            ')' => {
                if depth == 0 {
                    return false;
                }
                depth -= 1;
            }
            _ => {}
        }
    }
    depth == 0
}

/// deepest bracket nesting found in `s`
pub fn max_bracket_depth(s: &str) -> usize {
    let mut depth: usize = 0;
    let mut max_depth: usize = 0;
    for c in s.chars() {
        match c {
            '(' => {
                depth += 1;
                max_depth = max_depth.max(depth);
            }
            ')' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    max_depth
}

/// position of the '(' that closes with the ')' found at `bracket_end`
pub fn find_pair_to_this_bracket(input: &str, bracket_end: usize) -> Option<usize> {
    let mut depth: usize = 0;
    for (i, c) in input[..=bracket_end].char_indices().rev() {
        if c == ')' {
            depth += 1;
        } else if c == '(' {
            depth = depth.checked_sub(1)?;
            if depth == 0 {
                return Some(i);
            }
        }
    }
    None
}

/// positions of the chars accepted by `is_target` that are outside brackets only,
/// returned together with the char found there
pub fn find_char_positions_outside_brackets<F>(s: &str, is_target: F) -> Vec<(usize, char)>
where
    F: Fn(&str, usize, char) -> bool,
{
    let mut depth: usize = 0;
    let mut positions = Vec::new();
    for (i, ch) in s.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            _ if depth == 0 && is_target(s, i, ch) => positions.push((i, ch)),
            _ => {}
        }
    }
    positions
}

/// last non-whitespace char before byte position `pos`
pub fn previous_significant_char(s: &str, pos: usize) -> Option<char> {
    s[..pos].chars().rev().find(|c| !c.is_whitespace())
}

/// chars that may end an operand: `x`, `2`, `)`, `2.`
pub fn ends_operand(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == ')' || c == '.'
}

/// does the '+'/'-' at `pos` belong to a literal like `2.5e-3`?
pub fn is_exponent_sign(s: &str, pos: usize) -> bool {
    let before = &s[..pos];
    let Some(e) = before.chars().last() else {
        return false;
    };
    if e != 'e' && e != 'E' {
        return false;
    }
    let mantissa_part = &before[..before.len() - e.len_utf8()];
    let digits: String = mantissa_part
        .chars()
        .rev()
        .take_while(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    if !digits.chars().any(|c| c.is_ascii_digit()) {
        return false;
    }
    let head = &mantissa_part[..mantissa_part.len() - digits.len()];
    let glued_to_name = head
        .chars()
        .last()
        .is_some_and(|c| c.is_alphanumeric() || c == '_');
    let followed_by_digit = s[pos + 1..].chars().next().is_some_and(|c| c.is_ascii_digit());
    !glued_to_name && followed_by_digit
}

/// `num_values` evenly spaced points from `start` to `end`, both ends included
pub fn linspace(start: f64, end: f64, num_values: usize) -> Vec<f64> {
    match num_values {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (num_values as f64 - 1.0);
            let mut values: Vec<f64> = (0..num_values).map(|i| start + i as f64 * step).collect();
            // pin the last point so that rounding never leaves it short of `end`
            values[num_values - 1] = end;
            values
        }
    }
}
