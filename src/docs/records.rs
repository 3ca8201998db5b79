//! The PPL keyword documentation records.
//!
//! Content, section set, section order, and label text are authored data
//! and differ between records (several headings and one full description
//! remain in Spanish); they are kept exactly as written rather than
//! normalized.

use super::{Body, DocRecord, Label, Section};

pub(super) static RECORDS: &[DocRecord] = &[
    DocRecord {
        keyword: "MAKEMAT",
        sections: &[
            Section {
                label: Label::Heading("Sintaxis"),
                body: Body::Syntax(&["MAKEMAT(expression, rows, columns)"]),
            },
            Section {
                label: Label::Heading("Example of use"),
                body: Body::Example {
                    code: &["MAKEMAT(0,3,3)"],
                    note: Some("Returns a matrix of zeros 3 × 3 → [[0,0,0],[0,0,0],[0,0,0]]"),
                },
            },
            Section {
                label: Label::Heading("MAKEMAT"),
                body: Body::Description(&["Create a matrix with rows x columns dimensions, using expressions to calculate each element. If the expression contains the variables I and J, the calculation of each element substitutes the current row number for I and the current column number for J. You can also create a vector by specifying the number of elements (e) instead of the number of rows and columns."]),
            },
        ],
    },
    DocRecord {
        keyword: "MAKELIST",
        sections: &[
            Section {
                label: Label::Heading("Sintaxis"),
                body: Body::Syntax(&["MAKELIST(expression, variable, start, end, [increment])"]),
            },
            Section {
                label: Label::Heading("Example of use"),
                body: Body::Example {
                    code: &["MAKELIST(2*X-1, X, 1, 5, 1) returns {1, 3, 5, 7, 9}"],
                    note: None,
                },
            },
            Section {
                label: Label::Heading("MAKELIST"),
                body: Body::Description(&["Make list. Calculates a sequence of elements for a new list. Evaluates the expression, incrementing the variable from the start to the end of the values, using increment steps (default is 1). The function MAKELIST generates a series by automatically producing a list from the repeated evaluation of an expression."]),
            },
        ],
    },
    DocRecord {
        keyword: "BEGIN",
        sections: &[
            Section {
                label: Label::None,
                body: Body::Syntax(&["BEGIN command1; command2; ...; commandN; END;"]),
            },
            Section {
                label: Label::None,
                body: Body::Description(&["Define a command or a set of commands that must be executed together in a simple program."]),
            },
        ],
    },
    DocRecord {
        keyword: "RETURN",
        sections: &[
            Section {
                label: Label::None,
                body: Body::Syntax(&["RETURN expression;"]),
            },
            Section {
                label: Label::None,
                body: Body::Description(&["Returns the current value of the expression"]),
            },
        ],
    },
    DocRecord {
        keyword: "KILL",
        sections: &[
            Section {
                label: Label::None,
                body: Body::Syntax(&["KILL;"]),
            },
            Section {
                label: Label::None,
                body: Body::Description(&["Stops the execution of the program"]),
            },
        ],
    },
    DocRecord {
        keyword: "IF",
        sections: &[
            Section {
                label: Label::None,
                body: Body::Syntax(&["IF test THEN commands 1 ELSE commands 2 END;"]),
            },
            Section {
                label: Label::None,
                body: Body::Description(&["Evaluates test. If test is true (not equal to 0), executes commands 1; otherwise, executes commands 2."]),
            },
        ],
    },
    DocRecord {
        keyword: "CASE",
        sections: &[
            Section {
                label: Label::Heading("Syntax"),
                body: Body::Syntax(&[
                    "CASE",
                    " IF test1 THEN commands1 END;",
                    " IF test1 THEN commands1 END;",
                    " ⁝",
                    " IF testN THEN commandsN END;",
                    "END;",
                ]),
            },
            Section {
                label: Label::Heading("CASE"),
                body: Body::Description(&["Evaluates test1. If it is true, executes commands1 and closes the CASE. Otherwise, evaluates test1. If it is true, executes commands2 and closes the CASE. Continues evaluating tests until it finds a true one. If no true test is found, executes the default commands, if provided. The CASE command is limited to 127 branches."]),
            },
        ],
    },
    DocRecord {
        keyword: "IFERR",
        sections: &[
            Section {
                label: Label::None,
                body: Body::Syntax(&[
                    "•  IFERR commands1 THEN commands2 END;",
                    "•  IFERR commands1 THEN commands2 ELSE commands3 END;",
                ]),
            },
            Section {
                label: Label::None,
                body: Body::Description(&["Executes the sequence of commands1. If an error occurs during the execution of commands1, it executes the sequence of commands2. Otherwise, it executes the sequence of commands3."]),
            },
        ],
    },
    DocRecord {
        keyword: "FOR",
        sections: &[
            Section {
                label: Label::None,
                body: Body::Syntax(&["FOR var FROM start TO finish DO commands END;"]),
            },
            Section {
                label: Label::None,
                body: Body::Description(&["Defines the variable var with the value start, and as long as the value of this variable is less than or equal to finish, it executes the sequence of commands, and then adds 1 (increment) to var."]),
            },
        ],
    },
    DocRecord {
        keyword: "STEP",
        sections: &[
            Section {
                label: Label::None,
                body: Body::Syntax(&["FOR var FROM start TO (or DOWNTO) finish [STEP increment] DO command(s) END;"]),
            },
            Section {
                label: Label::None,
                body: Body::Description(&["Sets the variable var to start; then, while the value of this variable is less than or equal to (or greater than for DOWNTO) finish, it executes the commands and adds (or subtracts DOWNTO) 1 (or increments) to var."]),
            },
        ],
    },
    DocRecord {
        keyword: "DOWNTO",
        sections: &[
            Section {
                label: Label::None,
                body: Body::Syntax(&["FOR var FROM start DOWNTO finish DO commands END;"]),
            },
            Section {
                label: Label::None,
                body: Body::Description(&["Defines the variable var with the value start, and as long as the value of this variable is greater than or equal to finish, it executes the sequence of commands, and then subtracts 1 (decrement) from var."]),
            },
        ],
    },
    DocRecord {
        keyword: "LOCAL",
        sections: &[
            Section {
                label: Label::None,
                body: Body::Syntax(&[
                    "•  LOCAL var1,var2,…var8;",
                    "•  LOCAL value1:=10, value2:={};",
                ]),
            },
            Section {
                label: Label::None,
                body: Body::Description(&[
                    "Makes variables var1, var2, etc., local to the program in which they are found.",
                    "The maximum number that a LOCAL can store is 8 variables; to create more variables, you will have to declare another LOCAL with its variables.",
                ]),
            },
        ],
    },
    DocRecord {
        keyword: "EXPORT",
        sections: &[
            Section {
                label: Label::Heading("Syntax"),
                body: Body::Syntax(&[
                    "•  EXPORT FunctionName()",
                    "•  EXPORT FunctionName(Parameters)",
                ]),
            },
            Section {
                label: Label::Heading("Example of use"),
                body: Body::Example {
                    code: &[
                        "EXPORT FunctionName()",
                        "BEGIN",
                        r#" PRINT("Hello world");"#,
                        "END;",
                    ],
                    note: None,
                },
            },
            Section {
                label: Label::Heading("EXPORT"),
                body: Body::Description(&["In a program, declares a list of exported variables or an exported function."]),
            },
        ],
    },
    DocRecord {
        keyword: "VIEW",
        sections: &[
            Section {
                label: Label::None,
                body: Body::Syntax(&["VIEW “text”, FunctionName();"]),
            },
            Section {
                label: Label::None,
                body: Body::Description(&[r#"Allows a programmer to customize the Views menu. It makes "text" appear when the VIEW key is pressed and executes the function when the menu key `OK` (or the `ENTER` key) is pressed."#]),
            },
        ],
    },
    DocRecord {
        keyword: "ASC",
        sections: &[
            Section {
                label: Label::None,
                body: Body::Syntax(&["ASC(string)"]),
            },
            Section {
                label: Label::Tag("Example"),
                body: Body::Example {
                    code: &[r#"ASC("AB") returns [65,66]"#],
                    note: None,
                },
            },
            Section {
                label: Label::Tag("Description"),
                body: Body::Description(&["The function `ASC(string)` returns a list containing the ASCII codes of each character in the provided string."]),
            },
        ],
    },
    DocRecord {
        keyword: "LOWER",
        sections: &[
            Section {
                label: Label::None,
                body: Body::Syntax(&["LOWER(string)"]),
            },
            Section {
                label: Label::Tag("Example"),
                body: Body::Example {
                    code: &[
                        r#"•  LOWER("ABC") returns "abc""#,
                        r#"•  LOWER("ΑΒΓ") returns "αβγ""#,
                    ],
                    note: None,
                },
            },
            Section {
                label: Label::Tag("Description"),
                body: Body::Description(&["Converts uppercase characters in a string to lowercase."]),
            },
        ],
    },
    DocRecord {
        keyword: "UPPER",
        sections: &[
            Section {
                label: Label::None,
                body: Body::Syntax(&["UPPER(string)"]),
            },
            Section {
                label: Label::Tag("Example"),
                body: Body::Example {
                    code: &[
                        r#"•  UPPER("abc") returns "ABC""#,
                        r#"•  UPPER("αβγ") returns "ΑΒΓ""#,
                    ],
                    note: None,
                },
            },
            Section {
                label: Label::Tag("Description"),
                body: Body::Description(&["Converts lowercase characters in a string to uppercase."]),
            },
        ],
    },
    DocRecord {
        keyword: "CHAR",
        sections: &[
            Section {
                label: Label::None,
                body: Body::Syntax(&["CHAR(vector) or CHAR(integer)"]),
            },
            Section {
                label: Label::Tag("Example"),
                body: Body::Example {
                    code: &[
                        r#"•  CHAR(65) returns "A""#,
                        r#"•  CHAR({82,77,72}) returns "RMH""#,
                    ],
                    note: None,
                },
            },
            Section {
                label: Label::Tag("Description"),
                body: Body::Description(&["Returns the string corresponding to the character codes in vector or the unique code of the integer."]),
            },
        ],
    },
    DocRecord {
        keyword: "DIM",
        sections: &[
            Section {
                label: Label::None,
                body: Body::Syntax(&["DIM(string)"]),
            },
            Section {
                label: Label::Tag("Example"),
                body: Body::Example {
                    code: &[
                        r#"DIM("12345") returns 5, DIM("""") returns 1."#,
                        "(Note the use of two double quotes and the escape sequence).",
                    ],
                    note: None,
                },
            },
            Section {
                label: Label::Tag("Description"),
                body: Body::Description(&["Returns the number of characters in string."]),
            },
        ],
    },
    DocRecord {
        keyword: "STRING",
        sections: &[
            Section {
                label: Label::None,
                body: Body::Syntax(&["STRING(expression)"]),
            },
            Section {
                label: Label::None,
                body: Body::Description(&["Evaluates the expression and returns the result as a string."]),
            },
        ],
    },
    DocRecord {
        keyword: "INSTRING",
        sections: &[
            Section {
                label: Label::None,
                body: Body::Syntax(&["INSTRING(str1,str2)"]),
            },
            Section {
                label: Label::Tag("Example"),
                body: Body::Example {
                    code: &[
                        r#"•  INSTRING("vanilla", "van") returns 1"#,
                        r#"•  INSTRING("banana", "na") returns 3"#,
                        r#"•  INSTRING("ab", "abc") returns 0"#,
                    ],
                    note: None,
                },
            },
            Section {
                label: Label::Tag("Description"),
                body: Body::Description(&["Returns the index of the first occurrence of str2 in str1. Returns 0 if str2 is not present in str1. Note that the first character in a string is at position 1."]),
            },
        ],
    },
    DocRecord {
        keyword: "LEFT",
        sections: &[
            Section {
                label: Label::None,
                body: Body::Syntax(&["LEFT(str,n)"]),
            },
            Section {
                label: Label::Tag("Example"),
                body: Body::Example {
                    code: &[r#"LEFT("MOMOGUMBO",3) returns "MOM""#],
                    note: None,
                },
            },
            Section {
                label: Label::Tag("Description"),
                body: Body::Description(&["Returns the first n characters of the string str. If n ≥ DIM(str) or n < 0, returns str. If n == 0 returns the empty string."]),
            },
        ],
    },
    DocRecord {
        keyword: "RIGHT",
        sections: &[
            Section {
                label: Label::None,
                body: Body::Syntax(&["RIGHT(str,n)"]),
            },
            Section {
                label: Label::Tag("Example"),
                body: Body::Example {
                    code: &[r#"RIGHT("MOMOGUMBO",5) returns "GUMBO""#],
                    note: None,
                },
            },
            Section {
                label: Label::Tag("Description"),
                body: Body::Description(&["Returns the last n characters of the string str. If n <= 0, returns an empty string. If n > DIM(str), returns str."]),
            },
        ],
    },
    DocRecord {
        keyword: "MID",
        sections: &[
            Section {
                label: Label::None,
                body: Body::Syntax(&["MID(str,pos, [n])"]),
            },
            Section {
                label: Label::Tag("Example"),
                body: Body::Example {
                    code: &[r#"MID("MOMOGUMBO",3,5) returns "MOGUM", MID("PUDGE",4) returns "GE""#],
                    note: None,
                },
            },
            Section {
                label: Label::Tag("Description"),
                body: Body::Description(&["Extracts n characters from the string str starting at index pos. n is optional and if not specified, extracts all remaining characters from the string."]),
            },
        ],
    },
    DocRecord {
        keyword: "ROTATE",
        sections: &[
            Section {
                label: Label::None,
                body: Body::Syntax(&["ROTATE(str,n)"]),
            },
            Section {
                label: Label::Tag("Example"),
                body: Body::Example {
                    code: &[
                        r#"•  ROTATE("12345",2) returns "34512""#,
                        r#"•  ROTATE("12345",-1) returns "51234""#,
                        r#"•  ROTATE("12345",6) returns "12345""#,
                    ],
                    note: None,
                },
            },
            Section {
                label: Label::Tag("Description"),
                body: Body::Description(&["Permutation of characters in the string str. If 0 <= n < DIM(str), it moves n places to the left. If -DIM(str) < n <= -1, it moves n places to the right. If n > DIM(str) or n < -DIM(str), it returns str."]),
            },
        ],
    },
    DocRecord {
        keyword: "STRINGFROMID",
        sections: &[
            Section {
                label: Label::None,
                body: Body::Syntax(&["STRINGFROMID(integer)"]),
            },
            Section {
                label: Label::Tag("Example"),
                body: Body::Example {
                    code: &[
                        "•  STRINGFROMID(56) returns “Complex”",
                        "•  STRINGFROMID(202) returns “Real”",
                    ],
                    note: None,
                },
            },
            Section {
                label: Label::Tag("Description"),
                body: Body::Description(&["Returns, in the current language, the integrated string associated in the internal string table with the specified integer."]),
            },
        ],
    },
    DocRecord {
        keyword: "REPLACE",
        sections: &[
            Section {
                label: Label::None,
                body: Body::Syntax(&["REPLACE(object1, begin, object2)"]),
            },
            Section {
                label: Label::Tag("Example"),
                body: Body::Example {
                    code: &[r#"REPLACE("12345","3","99") returns "12995""#],
                    note: None,
                },
            },
            Section {
                label: Label::Tag("Description"),
                body: Body::Description(&["Replaces part of object1 with object2 starting from the beginning. Objects can be arrays, vectors, or strings."]),
            },
        ],
    },
    DocRecord {
        keyword: "C→PX",
        sections: &[
            Section {
                label: Label::None,
                body: Body::Syntax(&["C→PX(x,y) or C→PX({x,y})"]),
            },
            Section {
                label: Label::Tag("Description"),
                body: Body::Description(&["Converts Cartesian coordinates into screen coordinates."]),
            },
        ],
    },
    DocRecord {
        keyword: "DRAWMENU",
        sections: &[
            Section {
                label: Label::None,
                body: Body::Syntax(&["DRAWMENU({string1, string2, …, string6})"]),
            },
            Section {
                label: Label::Tag("Example"),
                body: Body::Example {
                    code: &[r#"DRAWMENU ({"ABC", "", "DEF"}) creates a menu with the first and third buttons labeled ABC and DEF respectively. The other four menu keys are blank."#],
                    note: None,
                },
            },
            Section {
                label: Label::Tag("Description"),
                body: Body::Description(&["Draws a menu of six buttons at the bottom of the screen, with labels string1, string2,..., string6."]),
            },
        ],
    },
    DocRecord {
        keyword: "RGB",
        sections: &[
            Section {
                label: Label::None,
                body: Body::Syntax(&["RGB(R, G, B, [A])"]),
            },
            Section {
                label: Label::Tag("Example"),
                body: Body::Example {
                    code: &[
                        "•  RGB(255,0,128) returns 16711808.",
                        "•  RECT(RGB(0,0,255)) produces a blue screen",
                        "•  LINE(0,0,8,8,RGB(0,255,0)) draws a green line",
                    ],
                    note: None,
                },
            },
            Section {
                label: Label::Tag("Description"),
                body: Body::Description(&["Returns an integer that can be used as the color parameter for a drawing function, based on the values of the red, green, and blue components (each from 0 to 255). If alpha is greater than 128, it returns the color marked as transparent. HP Prime does not support alpha channel blending."]),
            },
        ],
    },
    DocRecord {
        keyword: "ARC",
        sections: &[
            Section {
                label: Label::None,
                body: Body::Syntax(&["ARC(G, x, y, r [ , a1, a2, c])"]),
            },
            Section {
                label: Label::Tag("Example"),
                body: Body::Example {
                    code: &["ARC(0,0,60,0,π,RGB(255,0,0)) draws a red semicircle centered at (0,0), using the current window settings from Config. of graph, and a radius of 60 pixels. The semicircle is drawn counterclockwise, from 0 to π."],
                    note: None,
                },
            },
            Section {
                label: Label::Tag("Description"),
                body: Body::Description(&[
                    "Draws a circle or an arc on G, centered at point x, y, with radius r and color c starting at angle a1 and ending at angle a2.",
                    "G can be any of the graphics variables and is optional. The default value is G0 and r is given in pixels.",
                    "c is optional, and if not specified, black is used. It should be specified this way: #RRGGBB (in the same way a color is specified in HTML).",
                    "a1 and a2 follow the current angle mode and are optional. The default is a complete circle.",
                ]),
            },
        ],
    },
    DocRecord {
        keyword: "DIMGROB",
        sections: &[
            Section {
                label: Label::None,
                body: Body::Syntax(&["DIMGROB(G, w, h, [color]) or DIMGROB(G, w, h, list)"]),
            },
            Section {
                label: Label::Tag("Descripción"),
                body: Body::Description(&[
                    "Establece las dimensiones de GROB G en w*h. Inicializa la gráfica G con un color o con los datos gráficos proporcionados en lista.",
                    "Si el gráfico se inicializa utilizando datos gráficos, la lista es una lista de enteros. Cada entero, como se ve en base 16, describe un color cada 16 bits, en formato A1R5G5B5 (1 bit para el canal alfa y 5 bits para R, G y B).",
                ]),
            },
        ],
    },
    DocRecord {
        keyword: "FILLPOLY_P",
        sections: &[
            Section {
                label: Label::None,
                body: Body::Syntax(&["FILLPOLY_P([G],{(x1, y1), (x2, y2),…(xn, yn)}, Color, [alpha])"]),
            },
            Section {
                label: Label::Tag("Example"),
                body: Body::Example {
                    code: &[
                        "FILLPOLY_P(G1,{(20,20), (100, 20), (100, 100), (20, 100)}, {#FF0000, 128}) draws a",
                        "square, 80 pixels on a side, near the top-left corner of the screen, using the color",
                        "purple and the transparency level 128.",
                    ],
                    note: None,
                },
            },
            Section {
                label: Label::Tag("Description"),
                body: Body::Description(&[
                    "For the polygon defined by the list of points, fills the polygon with the color defined by the color",
                    "RGB number. If alpha is provided as an integer between 0 and 255 inclusive, the polygon is drawn with the",
                    "corresponding level of transparency. You can use a vector of points instead of a list; in this case,",
                    "the points can be expressed as complex numbers.",
                ]),
            },
        ],
    },
    DocRecord {
        keyword: "GETPIX",
        sections: &[
            Section {
                label: Label::None,
                body: Body::Syntax(&["GETPIX([G], x, y)"]),
            },
            Section {
                label: Label::Tag("Example"),
                body: Body::Example {
                    code: &["GETPIX(G1, 150, 60)"],
                    note: None,
                },
            },
            Section {
                label: Label::Tag("Description"),
                body: Body::Description(&[
                    "Returns the color of the pixel G with coordinates x,y.",
                    "G can be any of the graphic variables and is optional. The default value is G0, the current image.",
                ]),
            },
        ],
    },
    DocRecord {
        keyword: "GETPIX_P",
        sections: &[
            Section {
                label: Label::None,
                body: Body::Syntax(&["GETPIX_P([G], x, y)"]),
            },
            Section {
                label: Label::Tag("Example"),
                body: Body::Example {
                    code: &["GETPIX_P(G1, 150, 60)"],
                    note: None,
                },
            },
            Section {
                label: Label::Tag("Description"),
                body: Body::Description(&[
                    "Returns the color of the pixel G with coordinates x,y.",
                    "G can be any of the graphic variables and is optional. The default value is G0, the current image.",
                ]),
            },
        ],
    },
    DocRecord {
        keyword: "GROBH",
        sections: &[
            Section {
                label: Label::None,
                body: Body::Syntax(&["GROBH(G)"]),
            },
            Section {
                label: Label::Tag("Description"),
                body: Body::Description(&["G can be any of the graphic variables and is optional. The default value is G0."]),
            },
        ],
    },
    DocRecord {
        keyword: "GROBH_P",
        sections: &[
            Section {
                label: Label::None,
                body: Body::Syntax(&["GROBH_P(G)"]),
            },
            Section {
                label: Label::Tag("Description"),
                body: Body::Description(&["G can be any of the graphic variables and is optional. The default value is G0."]),
            },
        ],
    },
    DocRecord {
        keyword: "GROBW",
        sections: &[
            Section {
                label: Label::None,
                body: Body::Syntax(&["GROBW(G)"]),
            },
            Section {
                label: Label::Tag("Description"),
                body: Body::Description(&["G can be any of the graphic variables and is optional. The default value is G0."]),
            },
        ],
    },
    DocRecord {
        keyword: "GROBW_P",
        sections: &[
            Section {
                label: Label::None,
                body: Body::Syntax(&["GROBW_P(G)"]),
            },
            Section {
                label: Label::Tag("Description"),
                body: Body::Description(&["G can be any of the graphic variables and is optional. The default value is G0."]),
            },
        ],
    },
    DocRecord {
        keyword: "INVERT",
        sections: &[
            Section {
                label: Label::None,
                body: Body::Syntax(&["INVERT([G, x1, y1, x2, y2])"]),
            },
            Section {
                label: Label::Tag("Description"),
                body: Body::Description(&[
                    "Executes a reverse video of the selected area. G can be any of the graphic variables and is optional. The default value is G0.",
                    "x2, y2 are optional, and if not specified, they will be the bottom right of the graphic.",
                    "x1, y1 are optional, and if not specified, they will be the top left of the graphic. If only one pair x,y is specified, it refers to the top left.",
                ]),
            },
        ],
    },
    DocRecord {
        keyword: "INVERT_P",
        sections: &[
            Section {
                label: Label::None,
                body: Body::Syntax(&["INVERT_P([G, x1, y1, x2, y2])"]),
            },
            Section {
                label: Label::Tag("Description"),
                body: Body::Description(&[
                    "Executes a reverse video of the selected area. G can be any of the graphic variables and is optional. The default value is G0.",
                    "x2, y2 are optional, and if not specified, they will be the bottom right of the graphic.",
                    "x1, y1 are optional, and if not specified, they will be the top left of the graphic. If only one pair x,y is specified, it refers to the top left.",
                ]),
            },
        ],
    },
    DocRecord {
        keyword: "LINE",
        sections: &[
            Section {
                label: Label::None,
                body: Body::Syntax(&["LINE([G], x1, y1, x2, y2, [color])"]),
            },
            Section {
                label: Label::Tag("Description"),
                body: Body::Description(&["The basic format of LINE draws a line between the pixel coordinates of the graphic using the specified color."]),
            },
        ],
    },
    DocRecord {
        keyword: "LINE_P",
        sections: &[
            Section {
                label: Label::None,
                body: Body::Syntax(&["LINE_P([G], x1, y1, x2, y2, [color])"]),
            },
            Section {
                label: Label::Tag("Description"),
                body: Body::Description(&["The basic format of LINE_P draws a line between the pixel coordinates of the graphic using the specified color."]),
            },
        ],
    },
    DocRecord {
        keyword: "PIXON",
        sections: &[
            Section {
                label: Label::None,
                body: Body::Syntax(&["PIXON([G], x, y [,color])"]),
            },
            Section {
                label: Label::Tag("Description"),
                body: Body::Description(&["Sets the color of the pixel in the graphic variable G at the coordinates (x, y) to the specified color. G can be any of the graphic variables and is optional. The default value is G0, the current image."]),
            },
        ],
    },
    DocRecord {
        keyword: "PIXON_P",
        sections: &[
            Section {
                label: Label::None,
                body: Body::Syntax(&["PIXON_P([G], x, y [,color])"]),
            },
            Section {
                label: Label::Tag("Description"),
                body: Body::Description(&["Sets the color of the pixel in the graphic variable G at the coordinates (x, y) to the specified color. G can be any of the graphic variables and is optional. The default value is G0, the current image."]),
            },
        ],
    },
    DocRecord {
        keyword: "RECT",
        sections: &[
            Section {
                label: Label::None,
                body: Body::Syntax(&["RECT([G, x1, y1, x2, y2, borderColor, fillColor])"]),
            },
            Section {
                label: Label::Tag("Example"),
                body: Body::Example {
                    code: &[
                        "EXPORT BOX()",
                        "BEGIN",
                        "RECT();",
                        "RECT_P(40, 90, 320, 240, #000000, #FF0000);",
                        "WAIT;",
                        "END;",
                    ],
                    note: None,
                },
            },
            Section {
                label: Label::Tag("Description"),
                body: Body::Description(&[
                    "Draws a rectangle in G between the points x1,y1 and x2,y2 using the border color for the perimeter and the fill color for the interior.",
                    "G can be any of the graphic variables and is optional. The default value is G0, the current image.",
                    "x1, y1 are optional. The default values represent the top-left corner of the graphic.",
                    "x2, y2 are optional. The default values represent the bottom-right corner of the image.",
                    "Border color and fill color can be any color specified as #RRGGBB. Both are optional, and if not specified, the fill color will use the default border color values.",
                    "To erase a GROB, execute RECT(G). To clear the screen, execute RECT().",
                    "When optional arguments are provided in a command with multiple optional parameters (like RECT), the supplied arguments correspond first to the leftmost parameters. For example, in the following program, the arguments 40 and 90 in the RECT_P command correspond to x1 and y1. The argument #000000 corresponds to the border color, as it is the only additional argument. If there had been two additional arguments, they should have referred to x2 and y2 instead of border color and fill color. The program produces a rectangle with a black border and a red fill.",
                ]),
            },
        ],
    },
    DocRecord {
        keyword: "RECT_P",
        sections: &[
            Section {
                label: Label::None,
                body: Body::Syntax(&["RECT_P([G, x1, y1, x2, y2, borderColor, fillColor])"]),
            },
            Section {
                label: Label::Tag("Example"),
                body: Body::Example {
                    code: &[
                        "EXPORT BOX()",
                        "BEGIN",
                        "RECT();",
                        "RECT_P(40, 90, 320, 240, #000000, #FF0000);",
                        "WAIT;",
                        "END;",
                    ],
                    note: None,
                },
            },
            Section {
                label: Label::Tag("Description"),
                body: Body::Description(&[
                    "Draws a rectangle in G between the points x1,y1 and x2,y2 using the border color for the perimeter and the fill color for the interior.",
                    "G can be any of the graphic variables and is optional. The default value is G0, the current image.",
                    "x1, y1 are optional. The default values represent the top-left corner of the graphic.",
                    "x2, y2 are optional. The default values represent the bottom-right corner of the image.",
                    "Border color and fill color can be any color specified as #RRGGBB. Both are optional, and if not specified, the fill color will use the default border color values.",
                    "To erase a GROB, execute RECT(G). To clear the screen, execute RECT().",
                    "When optional arguments are provided in a command with multiple optional parameters (like RECT), the supplied arguments correspond first to the leftmost parameters. For example, in the following program, the arguments 40 and 90 in the RECT_P command correspond to x1 and y1. The argument #000000 corresponds to the border color, as it is the only additional argument. If there had been two additional arguments, they should have referred to x2 and y2 instead of border color and fill color. The program produces a rectangle with a black border and a red fill.",
                ]),
            },
        ],
    },
    DocRecord {
        keyword: "SUBGROB",
        sections: &[
            Section {
                label: Label::None,
                body: Body::Syntax(&["SUBGROB(srcGRB [,x1, y1, x2, y2], trgtGRB)"]),
            },
            Section {
                label: Label::Tag("Example"),
                body: Body::Example {
                    code: &["SUBGROB(G1, G4) will copy G1 to G4."],
                    note: None,
                },
            },
            Section {
                label: Label::Tag("Description"),
                body: Body::Description(&[
                    "Sets trgtGRB to be a copy of the area of srcGRB between the points x1,y1 and x2,y2.",
                    "srcGRB can be any of the graphic variables and is optional. The default value is G0.",
                    "trgtGRB can be any of the graphic variables except G0.",
                    "x2, y2 are optional, and if not specified, it will be the bottom-right corner of srcGRB.",
                    "x1, y1 are optional, and if not specified, it will be the top-left corner of srcGRB.",
                ]),
            },
        ],
    },
    DocRecord {
        keyword: "SUBGROB_P",
        sections: &[
            Section {
                label: Label::None,
                body: Body::Syntax(&["SUBGROB_P(srcGRB [ ,x1, y1, x2, y2], trgtGRB)"]),
            },
            Section {
                label: Label::Tag("Example"),
                body: Body::Example {
                    code: &["SUBGROB_P(G1, G4) will copy G1 into G4."],
                    note: None,
                },
            },
            Section {
                label: Label::Tag("Description"),
                body: Body::Description(&[
                    "Sets trgtGRB to be a copy of the area of srcGRB between the points x1,y1 and x2,y2.",
                    "srcGRB can be any of the graphics variables and is optional. The default is G0.",
                    "trgtGRB can be any of the graphics variables except G0.",
                    "x2, y2 are optional and if not specified will be the bottom right of srcGRB.",
                    "x1, y1 are optional and if not specified will be the top left of srcGRB.",
                ]),
            },
        ],
    },
    DocRecord {
        keyword: "TEXTOUT",
        sections: &[
            Section {
                label: Label::None,
                body: Body::Syntax(&["TEXTOUT(text, [G], x, y ,source, c1, width, c2)"]),
            },
            Section {
                label: Label::Tag("Example"),
                body: Body::Example {
                    code: &[r#"TEXTOUT("Hello",G1, 150, 200, 2, #FF0000, 150, #FFFFFF])"#],
                    note: None,
                },
            },
            Section {
                label: Label::Tag("Description"),
                body: Body::Description(&[
                    "Draws text using color c1 in the graphics G at position x, y using font. Does not draw text larger than width in pixels and clears the background before drawing the text using color c2.",
                    "G can be any of the graphics variables and is optional. The default is G0. This command returns the x coordinate of the pixel at the end of the text output.",
                    "Source can be:",
                    "0: currently selected font on the Home Screen Settings, 1: small font 2: large font. Source is optional and if specified is the currently selected font in Home Settings.",
                    "c1 can be any color specified as #RRGGBB. The default is black (#000000). Width is optional and if not specified, no clipping will occur.",
                    "c2 can be any color specified as #RRGGBB. c2 is optional. If not specified, the background will not be cleared.",
                ]),
            },
        ],
    },
    DocRecord {
        keyword: "TEXTOUT_P",
        sections: &[
            Section {
                label: Label::None,
                body: Body::Syntax(&["TEXTOUT_P(text, [G], x, y ,source, c1, width, c2)"]),
            },
            Section {
                label: Label::Tag("Example"),
                body: Body::Example {
                    code: &[r#"TEXTOUT_P("Hello",G1, 150, 200, 2, #FF0000, 150, #FFFFFF])"#],
                    note: None,
                },
            },
            Section {
                label: Label::Tag("Description"),
                body: Body::Description(&[
                    "Draws text using color c1 in the graphics G at position x, y using font. Does not draw text larger than width in pixels and clears the background before drawing the text using color c2.",
                    "G can be any of the graphics variables and is optional. The default is G0. This command returns the x coordinate of the pixel at the end of the text output.",
                    "Source can be:",
                    "0: currently selected font on the Home Screen Settings, 1: small font 2: large font. Source is optional and if specified is the currently selected font in Home Settings.",
                    "c1 can be any color specified as #RRGGBB. The default is black (#000000). Width is optional and if not specified, no clipping will occur.",
                    "c2 can be any color specified as #RRGGBB. c2 is optional. If not specified, the background will not be cleared.",
                ]),
            },
        ],
    },
    DocRecord {
        keyword: "TRIANGLE_P",
        sections: &[
            Section {
                label: Label::None,
                body: Body::Syntax(&[r#"TRIANGLE_P([G], x1, y1, x2, y2, x3, y3, c1, [c2, c3], [alpha], ["StringZ", z1, z2, z3])"#]),
            },
            Section {
                label: Label::Tag("Example"),
                body: Body::Example {
                    code: &[
                        "RECT();",
                        "TRIANGLE_P(40,20,120,100,40,100,RGB(128,0,255),128);",
                        "WAIT();",
                        "TRIANGLE_P({265,145,RGB(128,0,255),90},{240,220,RGB(255,200,50),100},{195,157,RGB(196,0,0),128});",
                        "WAIT();",
                    ],
                    note: None,
                },
            },
            Section {
                label: Label::Tag("Description"),
                body: Body::Description(&[
                    "Draws a triangle between the specified pixel coordinate points in the graphics using the specified color and transparency (0 ≤ Alpha ≤ 255). If 3 colors are specified, it blends the colors between the vertices.",
                    "The following form of TRIANGLE allows for the visualization of multiple triangles at once.",
                    "This is primarily used if you have a set of vertices and want to display them all at once.",
                    "The first 2 arrays indicate the x/y coordinates and the colors of each point. TRIANGLE_P will draw 1 quadrilateral for each set of 4 adjacent vertices and blend the colors associated with the 4 points.",
                    "If a z projection array is provided, for each point, this array is multiplied by the vector [x,y,z,1] to create the x,y viewing coordinates.",
                    "If zcode is a list containing 3 real numbers { ex, ey, ez } then x,y are further modified making x=ez/z*x-ex and y=ez/z*y-ey creating a perspective projection.",
                    "If zstring is provided, z clipping will occur using the z value (see below).",
                    r#"If zcode="N" or is a list starting with "N", then each z is normalized between 0 and 255."#,
                ]),
            },
        ],
    },
    DocRecord {
        keyword: "PIXOFF",
        sections: &[
            Section {
                label: Label::None,
                body: Body::Syntax(&["PIXOFF([G], x, y)"]),
            },
            Section {
                label: Label::Tag("Description"),
                body: Body::Description(&["Sets the color of the pixel G with coordinates x,y to white. G can be any of the graphics variables and is optional. The default is G0, the current image."]),
            },
        ],
    },
    DocRecord {
        keyword: "PIXOFF_P",
        sections: &[
            Section {
                label: Label::None,
                body: Body::Syntax(&["PIXOFF_P([G], x, y)"]),
            },
            Section {
                label: Label::Tag("Description"),
                body: Body::Description(&["Sets the color of the pixel G with coordinates x,y to white. G can be any of the graphics variables and is optional. The default is G0, the current image."]),
            },
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_count() {
        assert_eq!(RECORDS.len(), 54);
    }

    #[test]
    fn test_every_record_has_a_description() {
        for record in RECORDS {
            assert!(
                !record.description_paragraphs().is_empty(),
                "{} has no description",
                record.keyword
            );
        }
    }

    #[test]
    fn test_every_record_has_syntax() {
        for record in RECORDS {
            assert!(
                !record.syntax_lines().is_empty(),
                "{} has no syntax block",
                record.keyword
            );
        }
    }

    #[test]
    fn test_pixel_commands_have_both_variants() {
        let keywords: Vec<&str> = RECORDS.iter().map(|r| r.keyword).collect();
        for base in ["GETPIX", "GROBH", "GROBW", "INVERT", "LINE", "PIXON", "PIXOFF", "RECT", "SUBGROB", "TEXTOUT"] {
            assert!(keywords.contains(&base), "missing {base}");
            let pixel_variant = format!("{base}_P");
            assert!(
                keywords.iter().any(|k| **k == pixel_variant),
                "missing {pixel_variant}"
            );
        }
    }
}
