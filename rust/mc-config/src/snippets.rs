/*
 * Copyright 2025 Carver Automation Corporation.
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

//! Menu entries and viewer rules installed into the Midnight Commander config.

/// Skin installed when none is configured.
pub const DEFAULT_SKIN: &str = "modarin256";

/// Skin line replaced when none is configured.
pub const DEFAULT_SOURCE_SKIN: &str = "default";

/// Section headers in `mc.ext` that viewer rules are inserted after.
pub const MISC_EXT_SIGNATURE: &str = "### Miscellaneous ###";
pub const DOC_EXT_SIGNATURE: &str = "### Documents ###";
pub const IMG_EXT_SIGNATURE: &str = "### Images ###";

/// A user menu entry (`~/.config/mc/menu`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    /// Short tool name used in log output.
    pub name: &'static str,
    /// What the entry does.
    pub description: &'static str,
    /// Entry text exactly as written to the menu file.
    pub body: &'static str,
}

/// A file extension viewer rule (`~/.config/mc/mc.ext`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewerRule {
    pub name: &'static str,
    /// Section header the rule is inserted after.
    pub signature: &'static str,
    pub body: &'static str,
}

impl ViewerRule {
    /// Signature followed by the rule, as it appears once inserted.
    pub fn anchored(&self, separator: &str) -> String {
        format!("{}{}{}", self.signature, separator, self.body)
    }
}

// Trailing blanks in some entries match what earlier releases wrote, so
// presence checks keep recognising entries that are already installed.
pub const MENU_ITEMS: &[MenuItem] = &[
    MenuItem {
        name: "neofetch",
        description: "system information",
        body: r#"
I       System information
        clear
        neofetch
        echo -n "Press any key..."
        read ANSWER
"#,
    },
    MenuItem {
        name: "htop",
        description: "task monitor",
        body: r#"
H       Task monitor  HTOP
        htop
"#,
    },
    MenuItem {
        name: "btop",
        description: "task monitor",
        body: r#"
B       Task monitor  BTOP
        btop
"#,
    },
    MenuItem {
        name: "mtr",
        description: "traceroute tool",
        body: r#"
M       Network traceroute host MTR
        dialog --title "Traceroute" --clear --inputbox "Entry host address for traceroute:" 10 51 2> /tmp/mtr.tmp
        clear
        mtr --filename /tmp/mtr.tmp 
"#,
    },
    MenuItem {
        name: "git",
        description: "Git manager",
        body: r#"
G       Git manager
        lazygit-gm --path %d 
"#,
    },
    MenuItem {
        name: "python",
        description: "Python interpreter",
        body: r#"
P       Python3 interpreter
        clear
        python3 
"#,
    },
    MenuItem {
        name: "ddgr",
        description: "Internet searching",
        body: r#"
D       Internet searching
        dialog --title "Internet" --clear --inputbox "DuckDuckGo search:" 10 81 2> /tmp/inet_search.tmp
        clear
        cat /tmp/inet_search.tmp | ddgr --num 25 --expand  
        echo -n "Press any key..."
        read ANSWER
"#,
    },
    MenuItem {
        name: "lynx",
        description: "Internet browser",
        body: r#"
L       Internet browser
        dialog --title "Internet browser" --clear --inputbox "URL:" 10 81 2> /tmp/inet_url.tmp
        clear
        cat /tmp/inet_url.tmp | lynx -accept_all_cookies - 
"#,
    },
];

pub const VIEWER_RULES: &[ViewerRule] = &[
    ViewerRule {
        name: "log",
        signature: MISC_EXT_SIGNATURE,
        body: r#"
# Log
regex/\.[Ll][Oo][Gg]$
    View=lnav %f
"#,
    },
    ViewerRule {
        name: "pdf",
        signature: DOC_EXT_SIGNATURE,
        body: r#"
# Pdf
regex/\.[Pp][Dd][Ff]$
    View=pdftotext -layout %f - | batcat
"#,
    },
    ViewerRule {
        name: "html",
        signature: DOC_EXT_SIGNATURE,
        body: r#"
# Html
regex/\.[Hh][Tt][Mm][Ll]$
    View=lynx %f
"#,
    },
    ViewerRule {
        name: "htm",
        signature: DOC_EXT_SIGNATURE,
        body: r#"
# Htm
regex/\.[Hh][Tt][Mm]$
    View=lynx %f
"#,
    },
    ViewerRule {
        name: "docx",
        signature: DOC_EXT_SIGNATURE,
        body: r#"
# Docx
regex/\.[Dd][Oo][Cc][Xx]$
    View=pandoc -s %f -o /tmp/docx.txt; batcat /tmp/docx.txt
"#,
    },
    ViewerRule {
        name: "xlsx",
        signature: DOC_EXT_SIGNATURE,
        body: r#"
# Xlsx
regex/\.[Xx][Ll][Ss][Xx]$
    View=xlsx2csv %f /tmp/xlsx.txt; batcat /tmp/xlsx.txt
"#,
    },
    ViewerRule {
        name: "xml",
        signature: DOC_EXT_SIGNATURE,
        body: r#"
# XML
regex/\.[Xx][Mm][Ll]$
    View=batcat %f
"#,
    },
    ViewerRule {
        name: "images",
        signature: IMG_EXT_SIGNATURE,
        body: r#"
# Images
regex/\.(png|jpg|jpeg|gif)$
    View=tiv %f; echo -n "Press any key...";read ANSWER
"#,
    },
];
